use std::sync::LazyLock;

use regex::Regex;

use super::model::{Category, Menu, MenuItem};
use super::price::extract_price;

/// Column gap between an item name and its price in OCR output.
static COLUMN_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {4,}").expect("column gap pattern is valid"));

/// Builds a category/item tree from raw OCR text.
///
/// Rules, applied line by line after trimming and skipping blank lines:
/// - A line with no lower-case letters and no `$` opens a new category,
///   closing the previous one. Repeated names produce separate categories.
/// - Otherwise, inside an open category, a line split by runs of 4+ spaces
///   into at least two segments becomes an item when the last segment
///   holds a price. The item name is the first segment.
/// - Anything else is dropped silently.
///
/// Lines before the first heading never contribute. The last open category
/// is always kept, even without items.
pub fn classify_menu_text(text: &str) -> Menu {
    let mut menu = Menu::default();
    let mut current: Option<Category> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_heading(line) {
            if let Some(category) = current.take() {
                menu.categories.push(category);
            }
            current = Some(Category::new(line));
            continue;
        }

        if let Some(category) = current.as_mut()
            && let Some(item) = parse_item(line)
        {
            category.items.push(item);
        }
    }

    if let Some(category) = current {
        menu.categories.push(category);
    }

    menu
}

// NOTE: an all-caps line mentioning `$` is neither a heading nor, usually, an item.
fn is_heading(line: &str) -> bool {
    line.to_uppercase() == line && !line.contains('$')
}

fn parse_item(line: &str) -> Option<MenuItem> {
    let segments: Vec<&str> = COLUMN_GAP.split(line).collect();
    if segments.len() < 2 {
        return None;
    }

    let price = extract_price(segments.last()?)?;

    Some(MenuItem {
        name: segments[0].trim().to_string(),
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(name: &str, price: f64) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn should_build_categories_with_items_in_order() {
        let menu =
            classify_menu_text("DRINKS\nCola    2.50\nJuice    3.00\nFOOD\nBurger    9.99\n");

        assert_eq!(
            menu.categories,
            vec![
                Category {
                    name: "DRINKS".to_string(),
                    items: vec![item("Cola", 2.50), item("Juice", 3.00)],
                },
                Category {
                    name: "FOOD".to_string(),
                    items: vec![item("Burger", 9.99)],
                },
            ]
        );
    }

    #[test]
    fn should_keep_category_when_item_price_is_unparseable() {
        let menu = classify_menu_text("DRINKS\nCola    Free\n");

        assert_eq!(menu.categories.len(), 1);
        assert_eq!(menu.categories[0].name, "DRINKS");
        assert!(menu.categories[0].items.is_empty());
    }

    #[test]
    fn should_drop_items_before_first_heading() {
        let menu = classify_menu_text("Cola    2.50\n");
        assert!(menu.categories.is_empty());
    }

    #[test]
    fn should_return_empty_menu_when_text_is_blank() {
        assert_eq!(classify_menu_text(""), Menu::default());
        assert_eq!(classify_menu_text("  \n\t\n"), Menu::default());
    }

    #[test]
    fn should_keep_empty_categories_between_headings() {
        let menu = classify_menu_text("STARTERS\nMAINS\nSteak    21\n");

        assert_eq!(menu.categories.len(), 2);
        assert!(menu.categories[0].items.is_empty());
        assert_eq!(menu.categories[1].items, vec![item("Steak", 21.0)]);
    }

    #[test]
    fn should_not_merge_repeated_headings() {
        let menu = classify_menu_text("DRINKS\nCola    2\nDRINKS\nTea    1.5\n");

        assert_eq!(menu.categories.len(), 2);
        assert_eq!(menu.categories[0].name, "DRINKS");
        assert_eq!(menu.categories[1].name, "DRINKS");
        assert_eq!(menu.categories[1].items, vec![item("Tea", 1.5)]);
    }

    #[test]
    fn should_trim_heading_and_item_lines() {
        let menu = classify_menu_text("   SALADS   \n   Caesar    $8.75   \n");

        assert_eq!(menu.categories[0].name, "SALADS");
        assert_eq!(menu.categories[0].items, vec![item("Caesar", 8.75)]);
    }

    #[test]
    fn should_split_columns_on_four_or_more_spaces_only() {
        assert!(COLUMN_GAP.is_match("Cola    2.50"));
        assert!(COLUMN_GAP.is_match("Cola        2.50"));
        assert!(!COLUMN_GAP.is_match("Cola   2.50"));
    }

    #[test]
    fn should_ignore_lines_with_fewer_than_four_spaces_between_columns() {
        let menu = classify_menu_text("DRINKS\nCola   2.50\nTea 1.00\n");
        assert!(menu.categories[0].items.is_empty());
    }

    #[test]
    fn should_price_item_from_last_segment() {
        let menu = classify_menu_text("PASTA\nCarbonara    large        $14\n");
        assert_eq!(menu.categories[0].items, vec![item("Carbonara", 14.0)]);
    }

    #[test]
    fn should_treat_punctuation_only_line_as_heading() {
        let menu = classify_menu_text("DRINKS\n-----\nCola    2.50\n");

        assert_eq!(menu.categories.len(), 2);
        assert_eq!(menu.categories[1].name, "-----");
        assert_eq!(menu.categories[1].items, vec![item("Cola", 2.50)]);
    }

    #[test]
    fn should_treat_digit_only_item_name_line_as_heading() {
        // No lower-case letters, so this reads as a heading rather than an item.
        let menu = classify_menu_text("DRINKS\n7UP    2.00\n");

        assert_eq!(menu.categories.len(), 2);
        assert_eq!(menu.categories[1].name, "7UP    2.00");
    }

    #[test]
    fn should_drop_all_caps_line_containing_currency_marker() {
        // Known gap: an upper-case heading that mentions `$` is silently lost,
        // and following items stay in the previous category.
        let menu = classify_menu_text("DRINKS\nHAPPY HOUR $5\nBeer    4.00\n");

        assert_eq!(menu.categories.len(), 1);
        assert_eq!(menu.categories[0].name, "DRINKS");
        assert_eq!(menu.categories[0].items, vec![item("Beer", 4.0)]);
    }

    #[test]
    fn should_accept_all_caps_currency_line_as_item_when_columns_split() {
        let menu = classify_menu_text("DRINKS\nCOLA    $2.50\n");
        assert_eq!(menu.categories[0].items, vec![item("COLA", 2.50)]);
    }

    #[test]
    fn should_handle_windows_line_endings() {
        let menu = classify_menu_text("DRINKS\r\nCola    2.50\r\n");
        assert_eq!(menu.categories[0].items, vec![item("Cola", 2.50)]);
    }

    fn eligible_line_count(text: &str) -> usize {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !is_heading(l))
            .count()
    }

    proptest! {
        #[test]
        fn should_produce_no_categories_when_no_line_is_a_heading(
            lines in prop::collection::vec(
                prop_oneof!["[a-z][a-zA-Z0-9 .]{0,20}", "[A-Z0-9 ]{0,10}\\$[A-Z0-9 .]{0,10}"],
                0..12,
            )
        ) {
            let menu = classify_menu_text(&lines.join("\n"));
            prop_assert!(menu.categories.is_empty());
        }

        #[test]
        fn should_never_produce_more_items_than_eligible_lines(text in "[A-Za-z0-9 $.\n]{0,300}") {
            let menu = classify_menu_text(&text);
            prop_assert!(menu.item_count() <= eligible_line_count(&text));
        }

        #[test]
        fn should_classify_identically_when_run_twice(text in "[A-Za-z0-9 $.\n]{0,300}") {
            prop_assert_eq!(classify_menu_text(&text), classify_menu_text(&text));
        }
    }
}
