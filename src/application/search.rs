// src/application/search.rs
use crate::domain::Card;

/// Cards matching `term`, in their original order.
///
/// # Examples
///
/// ```
/// use cardbox::application::filter_cards;
/// use cardbox::domain::Card;
///
/// let cards = vec![Card {
///     id: "1".to_string(),
///     name: "Ann".to_string(),
///     company: "Acme".to_string(),
///     title: "CTO".to_string(),
///     email: String::new(),
///     phone: String::new(),
///     tags: vec!["vip".to_string()],
///     image_url: String::new(),
/// }];
/// assert_eq!(filter_cards(&cards, "acm").len(), 1);
/// assert!(filter_cards(&cards, "zzz").is_empty());
/// ```
pub fn filter_cards<'a>(cards: &'a [Card], term: &str) -> Vec<&'a Card> {
    cards.iter().filter(|card| card.matches(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn card(id: &str, name: &str, company: &str, title: &str, tags: &[&str]) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            company: company.to_string(),
            title: title.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image_url: format!("http://localhost:5000/uploads/{id}.png"),
        }
    }

    fn sample() -> Vec<Card> {
        vec![
            card("1", "Ann", "Acme", "CTO", &["vip"]),
            card("2", "Bob", "Globex", "Engineer", &["hardware", "lead"]),
            card("3", "Cleo", "Initech", "Acme liaison", &[]),
        ]
    }

    fn ids(cards: &[&Card]) -> Vec<String> {
        cards.iter().map(|c| c.id.clone()).collect()
    }

    #[rstest]
    #[case("acm", &["1", "3"])]
    #[case("GLOBEX", &["2"])]
    #[case("engineer", &["2"])]
    #[case("ware, le", &["2"])]
    #[case("vip", &["1"])]
    #[case("zzz", &[])]
    fn given_term_when_filtering_then_returns_matching_ids(
        #[case] term: &str,
        #[case] expected: &[&str],
    ) {
        let cards = sample();

        let result = filter_cards(&cards, term);

        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn given_empty_term_when_filtering_then_returns_all_in_order() {
        let cards = sample();

        let result = filter_cards(&cards, "");

        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn given_term_when_filtering_twice_then_result_is_unchanged() {
        let cards = sample();

        let once: Vec<Card> = filter_cards(&cards, "ac").into_iter().cloned().collect();
        let twice = filter_cards(&once, "ac");

        assert_eq!(ids(&twice), once.iter().map(|c| c.id.clone()).collect::<Vec<_>>());
    }

    #[rstest]
    #[case("acme")]
    #[case("cto")]
    #[case("Lead")]
    fn given_term_and_its_uppercase_when_filtering_then_results_are_identical(#[case] term: &str) {
        let cards = sample();

        assert_eq!(
            ids(&filter_cards(&cards, term)),
            ids(&filter_cards(&cards, &term.to_uppercase()))
        );
    }

    #[test]
    fn given_empty_list_when_filtering_then_returns_empty() {
        assert!(filter_cards(&[], "ann").is_empty());
    }
}
