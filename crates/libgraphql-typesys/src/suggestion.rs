const MAX_SUGGESTIONS: usize = 5;

/// Given an invalid `input` and a list of valid `options`, returns the options
/// most similar to the input, closest first.
///
/// An option is kept when its lexical distance to the input is at most
/// `floor(input.len() * 0.4) + 1`.
pub(crate) fn suggestion_list<'a>(
    input: &str,
    options: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let threshold = (input.chars().count() as f64 * 0.4).floor() as usize + 1;
    let lexical_distance = LexicalDistance::new(input);

    let mut by_distance: Vec<(usize, &str)> = options.into_iter()
        .filter_map(|option| {
            lexical_distance.measure(option, threshold)
                .map(|distance| (distance, option))
        })
        .collect();
    by_distance.sort_by(|(dist_a, opt_a), (dist_b, opt_b)| {
        dist_a.cmp(dist_b).then_with(|| opt_a.cmp(opt_b))
    });
    by_distance.dedup_by(|(_, a), (_, b)| a == b);
    by_distance.into_iter()
        .map(|(_, option)| option.to_string())
        .collect()
}

/// Renders `"A"`, `"A" or "B"`, or `"A", "B", or "C"`, using at most five
/// items.
pub(crate) fn quoted_or_list(items: &[String]) -> String {
    let quoted: Vec<String> =
        items.iter()
            .take(MAX_SUGGESTIONS)
            .map(|item| format!("\"{item}\""))
            .collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Produces the ` Did you mean ...?` suffix appended to error messages, or an
/// empty string when there is nothing to suggest.
pub(crate) fn did_you_mean(sub_message: Option<&str>, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let list = quoted_or_list(suggestions);
    match sub_message {
        Some(sub_message) => format!(" Did you mean {sub_message} {list}?"),
        None => format!(" Did you mean {list}?"),
    }
}

/// Optimal string alignment distance (Levenshtein plus transposition of two
/// adjacent characters), with exact and case-insensitive matches short
/// circuited to distances of 0 and 1.
struct LexicalDistance<'a> {
    input: &'a str,
    input_lower: Vec<char>,
}
impl<'a> LexicalDistance<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            input_lower: input.to_lowercase().chars().collect(),
        }
    }

    fn measure(&self, option: &str, threshold: usize) -> Option<usize> {
        if self.input == option {
            return Some(0);
        }

        let option_lower: Vec<char> = option.to_lowercase().chars().collect();
        if self.input_lower == option_lower {
            return Some(1);
        }

        let (a, b) =
            if self.input_lower.len() < option_lower.len() {
                (option_lower.as_slice(), self.input_lower.as_slice())
            } else {
                (self.input_lower.as_slice(), option_lower.as_slice())
            };
        let a_len = a.len();
        let b_len = b.len();

        if a_len - b_len > threshold {
            return None;
        }

        let mut rows = [
            (0..=b_len).collect::<Vec<usize>>(),
            vec![0; b_len + 1],
            vec![0; b_len + 1],
        ];

        for i in 1..=a_len {
            let mut smallest_cell = i;
            rows[i % 3][0] = i;

            for j in 1..=b_len {
                let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

                let mut current = (rows[(i - 1) % 3][j] + 1)
                    .min(rows[i % 3][j - 1] + 1)
                    .min(rows[(i - 1) % 3][j - 1] + cost);

                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    current = current.min(rows[(i - 2) % 3][j - 2] + 1);
                }

                smallest_cell = smallest_cell.min(current);
                rows[i % 3][j] = current;
            }

            // Early exit: no cell in this row is within the threshold.
            if smallest_cell > threshold {
                return None;
            }
        }

        let distance = rows[a_len % 3][b_len];
        (distance <= threshold).then_some(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_results_when_input_is_empty() {
        assert_eq!(suggestion_list("", ["a"]), vec!["a".to_string()]);
    }

    #[test]
    fn returns_empty_array_when_there_are_no_options() {
        assert!(suggestion_list("input", []).is_empty());
    }

    #[test]
    fn returns_options_with_small_lexical_distance() {
        assert_eq!(suggestion_list("greenish", ["green"]), vec!["green".to_string()]);
        assert_eq!(suggestion_list("green", ["greenish"]), vec!["greenish".to_string()]);
    }

    #[test]
    fn rejects_options_with_distance_that_exceeds_threshold() {
        assert!(suggestion_list("aaaa", ["bbbb"]).is_empty());
        assert!(suggestion_list("a", ["b"]).len() == 1);
        assert!(suggestion_list("ab", ["ca"]).is_empty());
    }

    #[test]
    fn returns_options_with_different_case() {
        assert_eq!(
            suggestion_list("verylongstring", ["VERYLONGSTRING"]),
            vec!["VERYLONGSTRING".to_string()],
        );
        assert_eq!(
            suggestion_list("VERYLONGSTRING", ["VeryLongString"]),
            vec!["VeryLongString".to_string()],
        );
    }

    #[test]
    fn returns_options_with_transpositions() {
        assert_eq!(suggestion_list("agr", ["arg"]), vec!["arg".to_string()]);
        assert_eq!(
            suggestion_list("214365879", ["123456789"]),
            vec!["123456789".to_string()],
        );
    }

    #[test]
    fn returns_options_sorted_by_distance_then_name() {
        assert_eq!(
            suggestion_list("abc", ["a", "ab", "abc"]),
            vec!["abc".to_string(), "ab".to_string(), "a".to_string()],
        );
        assert_eq!(
            suggestion_list("GraphQl", ["graphics", "SQL", "GraphQL", "quarks", "mark"]),
            vec!["GraphQL".to_string(), "graphics".to_string()],
        );
        assert_eq!(
            suggestion_list("a", ["b", "d", "c"]),
            vec!["b".to_string(), "c".to_string(), "d".to_string()],
        );
    }

    #[test]
    fn quoted_or_list_renders_at_most_five_items() {
        let items = |names: &[&str]| -> Vec<String> {
            names.iter().map(|name| name.to_string()).collect()
        };
        assert_eq!(quoted_or_list(&items(&["A"])), "\"A\"");
        assert_eq!(quoted_or_list(&items(&["A", "B"])), "\"A\" or \"B\"");
        assert_eq!(quoted_or_list(&items(&["A", "B", "C"])), "\"A\", \"B\", or \"C\"");
        assert_eq!(
            quoted_or_list(&items(&["A", "B", "C", "D", "E", "F"])),
            "\"A\", \"B\", \"C\", \"D\", or \"E\"",
        );
    }

    #[test]
    fn did_you_mean_is_empty_without_suggestions() {
        assert_eq!(did_you_mean(Some("the enum value"), &[]), "");
        assert_eq!(
            did_you_mean(Some("the enum value"), &["RED".to_string()]),
            " Did you mean the enum value \"RED\"?",
        );
        assert_eq!(did_you_mean(None, &["Foo".to_string()]), " Did you mean \"Foo\"?");
    }
}
