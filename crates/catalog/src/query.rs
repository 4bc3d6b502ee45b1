//! Catalog query-string dialect.
//!
//! Recognised params: `age`, `collection`, `budget`, `color` (repeatable),
//! `filter` (`sale`, `new`, `age`, `gender`), `gender` and `reset`. Unknown
//! params and values are ignored so an old or hand-edited link still opens the
//! catalog.

use std::borrow::Cow;

use crate::filter::FilterSelection;
use crate::options::{AgeBucket, BudgetRange, Color, Gender};

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced).map(Cow::into_owned) {
        Ok(decoded) => decoded,
        Err(_) => spaced,
    }
}

/// Split a query string into decoded `(key, value)` pairs, in order.
///
/// A leading `?` is accepted; a key without `=` has an empty value.
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (decode(key), decode(value))
        })
        .collect()
}

/// Build the selection encoded by `query`.
///
/// `reset` anywhere in the query yields the default selection.
pub fn from_query(query: &str) -> FilterSelection {
    let pairs = parse_pairs(query);
    let mut selection = FilterSelection::default();

    if pairs.iter().any(|(key, _)| key == "reset") {
        return selection;
    }

    for (key, value) in &pairs {
        let value = value.trim();
        match key.as_str() {
            "age" => {
                if let Some(age) = AgeBucket::from_key(value) {
                    selection.ages.insert(age);
                }
            }
            "collection" if !value.is_empty() => {
                selection.collections.insert(value.to_string());
            }
            "budget" => {
                if let Some(budget) = BudgetRange::from_key(value) {
                    selection.budgets.insert(budget);
                }
            }
            "color" => {
                if let Some(color) = Color::from_key(value) {
                    selection.colors.insert(color);
                }
            }
            "filter" => match value {
                "sale" => selection.sale_only = true,
                "new" => selection.new_only = true,
                "age" => selection.sort_by_age = true,
                _ => {}
            },
            "gender" => {
                if let Some(gender) = Gender::from_key(value) {
                    selection.gender = Some(gender);
                }
            }
            _ => {}
        }
    }

    selection
}

/// Encode the filter axes of `selection`, without the leading `?`.
///
/// Params come out in dialect order and empty axes are omitted, so the default
/// selection encodes to an empty string. The sort mode is page state and is not
/// part of the dialect.
pub fn to_query(selection: &FilterSelection) -> String {
    let mut params: Vec<(&str, Cow<'_, str>)> = Vec::new();

    params.extend(selection.ages.iter().map(|a| ("age", urlencoding::encode(a.key()))));
    params.extend(
        selection
            .collections
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| ("collection", urlencoding::encode(c))),
    );
    params.extend(selection.budgets.iter().map(|b| ("budget", urlencoding::encode(b.key()))));
    params.extend(selection.colors.iter().map(|c| ("color", urlencoding::encode(c.key()))));

    if selection.sale_only {
        params.push(("filter", Cow::Borrowed("sale")));
    }
    if selection.new_only {
        params.push(("filter", Cow::Borrowed("new")));
    }
    if selection.sort_by_age {
        params.push(("filter", Cow::Borrowed("age")));
    }
    if let Some(gender) = selection.gender {
        params.push(("filter", Cow::Borrowed("gender")));
        params.push(("gender", Cow::Borrowed(gender.key())));
    }

    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singleton_axes_from_the_gift_finder() {
        let sel = from_query("?age=0-6&budget=under-20&color=roz");
        assert!(sel.ages.contains(&AgeBucket::ZeroToSixMonths));
        assert!(sel.budgets.contains(&BudgetRange::Under20));
        assert!(sel.colors.contains(&Color::Roz));
        assert_eq!(sel.active_count(), 3);
    }

    #[test]
    fn repeated_params_accumulate() {
        let sel = from_query("collection=bears&collection=dolls&age=1-3&age=3%2B");
        assert_eq!(sel.collections.len(), 2);
        assert!(sel.ages.contains(&AgeBucket::ThreePlusYears));
        assert!(sel.ages.contains(&AgeBucket::OneToThreeYears));
    }

    #[test]
    fn filter_flags_and_gender() {
        let sel = from_query("filter=sale&filter=age&filter=gender&gender=girl");
        assert!(sel.sale_only);
        assert!(sel.sort_by_age);
        assert!(!sel.new_only);
        assert_eq!(sel.gender, Some(Gender::Girl));

        assert_eq!(from_query("gender=boy").gender, Some(Gender::Boy));
        assert!(from_query("filter=new").new_only);
    }

    #[test]
    fn unknown_values_are_ignored() {
        let sel = from_query("age=99&color=multicolor&budget=&type=plush&collection=");
        assert!(sel.is_default());
    }

    #[test]
    fn reset_wins_over_everything_else() {
        assert!(from_query("age=0-6&filter=sale&reset=1").is_default());
        assert!(from_query("reset").is_default());
    }

    #[test]
    fn plus_and_percent_decode_to_spaces() {
        let pairs = parse_pairs("collection=baby+blankets&x=a%20b");
        assert_eq!(pairs[0], ("collection".to_string(), "baby blankets".to_string()));
        assert_eq!(pairs[1].1, "a b");
    }

    #[test]
    fn encodes_in_dialect_order_without_empty_values() {
        let mut sel = FilterSelection::default();
        assert_eq!(to_query(&sel), "");

        sel.toggle_color(Color::Roz);
        sel.toggle_budget(BudgetRange::Under20);
        sel.toggle_age(AgeBucket::ZeroToSixMonths);
        sel.toggle_collection("");
        assert_eq!(to_query(&sel), "age=0-6&budget=under-20&color=roz");
    }

    #[test]
    fn encoded_query_parses_back() {
        let mut sel = FilterSelection::default();
        sel.toggle_collection("baby blankets");
        sel.toggle_age(AgeBucket::ThreePlusYears);
        sel.toggle_new_only();
        sel.set_gender(Some(Gender::Unisex));
        let encoded = to_query(&sel);
        assert!(encoded.contains("age=3%2B"));
        assert!(encoded.contains("collection=baby%20blankets"));
        assert_eq!(from_query(&encoded), sel);
    }
}
