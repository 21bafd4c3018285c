//! Algebraic laws of the gallery filter engine.

use proptest::prelude::*;

use showcase_domain::automation::{AutomationItem, KnownCategory, OTHER_LABEL};
use showcase_domain::filter::FilterCriteria;

const TAG_POOL: &[&str] = &[
    "Sales & CRM",
    "Marketing",
    "Operations",
    "Data",
    "IT",
    "HR",
    "Finance",
    "E-commerce",
    "Logistics",
    "Legal",
];

const BENEFIT_POOL: &[&str] = &["Productivity", "Sales", "Cost Savings", "Compliance"];

const WORDS: &[&str] = &["CRM", "Bot", "Invoice", "Sync", "sales", "Report", "lead", "hr"];

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..4).prop_map(|words| words.join(" "))
}

fn arb_item() -> impl Strategy<Value = AutomationItem> {
    (
        arb_text(),
        arb_text(),
        prop::collection::vec(prop::sample::select(TAG_POOL), 0..4),
        prop::collection::vec(prop::sample::select(BENEFIT_POOL), 0..3),
    )
        .prop_map(|(title, description, tags, benefits)| {
            AutomationItem::builder()
                .title(title)
                .description(description)
                .tags(tags.into_iter().map(str::to_string).collect())
                .benefits(benefits.into_iter().map(str::to_string).collect())
                .build()
        })
}

fn arb_category_label() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(KnownCategory::ALL.to_vec()).prop_map(|c| c.label().to_string()),
        Just("Logistics".to_string()),
        Just(OTHER_LABEL.to_string()),
    ]
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), prop::sample::select(WORDS).prop_map(str::to_string)]
}

fn arb_benefit() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(BENEFIT_POOL).prop_map(str::to_string)
    ]
}

fn owned(items: Vec<&AutomationItem>) -> Vec<AutomationItem> {
    items.into_iter().cloned().collect()
}

proptest! {
    #[test]
    fn empty_criteria_select_the_whole_base(base in prop::collection::vec(arb_item(), 0..12)) {
        let visible = owned(FilterCriteria::new().apply(&base));
        prop_assert_eq!(visible, base);
    }

    #[test]
    fn filtering_is_idempotent(
        base in prop::collection::vec(arb_item(), 0..12),
        query in arb_query(),
        categories in prop::collection::vec(arb_category_label(), 0..3),
        benefit in arb_benefit(),
    ) {
        let criteria = categories
            .into_iter()
            .fold(FilterCriteria::new().with_query(query), FilterCriteria::with_category)
            .with_benefit(benefit);

        let once = owned(criteria.apply(&base));
        let twice = owned(criteria.apply(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn predicates_commute(
        base in prop::collection::vec(arb_item(), 0..12),
        query in arb_query(),
        category in arb_category_label(),
        benefit in arb_benefit(),
    ) {
        let text = FilterCriteria::new().with_query(query.clone());
        let cat = FilterCriteria::new().with_category(category.clone());
        let ben = FilterCriteria::new().with_benefit(benefit.clone());

        let text_then_cat = owned(cat.apply(&owned(text.apply(&base))));
        let cat_then_text = owned(text.apply(&owned(cat.apply(&base))));
        prop_assert_eq!(&text_then_cat, &cat_then_text);

        let combined = FilterCriteria::new()
            .with_query(query)
            .with_category(category)
            .with_benefit(benefit);
        let stepwise = owned(ben.apply(&text_then_cat));
        prop_assert_eq!(owned(combined.apply(&base)), stepwise);
    }

    #[test]
    fn visible_items_keep_base_order(
        base in prop::collection::vec(arb_item(), 0..12),
        query in arb_query(),
    ) {
        let visible = FilterCriteria::new().with_query(query).apply(&base);
        let positions: Vec<usize> = visible
            .iter()
            .filter_map(|v| base.iter().position(|b| b.id == v.id))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn category_is_first_known_key_or_first_tag_or_other(
        tags in prop::collection::vec(prop::sample::select(TAG_POOL), 0..5),
    ) {
        let item = AutomationItem::builder()
            .tags(tags.iter().map(|t| (*t).to_string()).collect())
            .build();
        let expected = KnownCategory::ALL
            .into_iter()
            .find(|cat| tags.contains(&cat.key()))
            .map(|cat| cat.label().to_string())
            .or_else(|| tags.first().map(|t| (*t).to_string()))
            .unwrap_or_else(|| OTHER_LABEL.to_string());
        prop_assert_eq!(item.category.label(), expected.as_str());
    }

    #[test]
    fn reset_restores_the_base(
        base in prop::collection::vec(arb_item(), 0..12),
        query in arb_query(),
        category in arb_category_label(),
        benefit in arb_benefit(),
    ) {
        let mut criteria = FilterCriteria::new()
            .with_query(query)
            .with_category(category)
            .with_benefit(benefit);
        criteria.reset();
        prop_assert_eq!(owned(criteria.apply(&base)), base);
    }
}
