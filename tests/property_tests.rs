//! Property tests for filtering, sorting and pagination

mod query_harness;

use policy_browser::prelude::*;
use proptest::prelude::*;
use query_harness::*;
use std::cmp::Ordering;

const NAMES: [&str; 6] = ["Alpha", "alpha", "beta", "Gamma", "delta", ""];
const PEOPLE: [&str; 4] = ["Jon Doe", "Jane Smith", "Clark Kent", "Tony Stark"];

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..60).prop_map(|offset| date("2020-01-01") + chrono::Days::new(offset * 11))
}

fn arb_type() -> impl Strategy<Value = PolicyType> {
    prop::sample::select(PolicyType::ALL.to_vec())
}

fn arb_records() -> impl Strategy<Value = Vec<PolicyRecord>> {
    prop::collection::vec(
        (
            prop::sample::select(NAMES.to_vec()),
            arb_date(),
            arb_date(),
            prop::sample::select(PEOPLE.to_vec()),
            prop::sample::select(PEOPLE.to_vec()),
            arb_type(),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (name, inception, created, by, modified, t))| {
                PolicyRecord::new(id as u64, name, inception, created, by, modified, t)
            })
            .collect()
    })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(prop::sample::select(vec!["a", "A", "ph", "mm", ""])),
        prop::option::of(arb_type()),
        prop::option::of(prop::sample::select(vec!["doe", "KENT", "s"])),
        prop::option::of(prop::sample::select(vec!["smith", "t"])),
        prop::option::of(arb_date()),
        prop::option::of(arb_date()),
        prop::option::of(arb_date()),
        prop::option::of(arb_date()),
    )
        .prop_map(|(name, t, by, modified, cf, ct, inf, int)| FilterCriteria {
            name_contains: name.map(str::to_string),
            type_equals: t.into(),
            created_by_contains: by.map(str::to_string),
            modified_by_contains: modified.map(str::to_string),
            created_date_from: cf,
            created_date_to: ct,
            inception_date_from: inf,
            inception_date_to: int,
        })
}

fn arb_sort() -> impl Strategy<Value = SortSpec> {
    (
        prop::sample::select(SortKey::ALL.to_vec()),
        prop::bool::ANY,
    )
        .prop_map(|(key, desc)| {
            if desc {
                SortSpec::descending(key)
            } else {
                SortSpec::ascending(key)
            }
        })
}

/// Reference matcher written directly from the matching rules
fn satisfies(record: &PolicyRecord, c: &FilterCriteria) -> bool {
    let text = |needle: &Option<String>, hay: &str| match needle.as_deref() {
        None | Some("") => true,
        Some(n) => hay.to_lowercase().contains(&n.to_lowercase()),
    };
    let in_range = |d: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>| {
        from.is_none_or(|f| d >= f) && to.is_none_or(|t| d <= t)
    };

    text(&c.name_contains, &record.name)
        && text(&c.created_by_contains, &record.created_by)
        && text(&c.modified_by_contains, &record.modified_by)
        && c.type_equals.accepts(record.policy_type)
        && in_range(record.created_date, c.created_date_from, c.created_date_to)
        && in_range(record.inception_date, c.inception_date_from, c.inception_date_to)
}

proptest! {
    #[test]
    fn property_filter_is_order_preserving_subsequence(records in arb_records(), criteria in arb_criteria()) {
        let all = ids(&records);
        let kept = ids(filter(&records, &criteria));
        prop_assert!(is_subsequence(&kept, &all));
    }

    #[test]
    fn property_filter_keeps_exactly_the_satisfying_records(records in arb_records(), criteria in arb_criteria()) {
        let kept = ids(filter(&records, &criteria));
        let expected: Vec<u64> = records
            .iter()
            .filter(|r| satisfies(r, &criteria))
            .map(|r| r.id.0)
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn property_empty_criteria_returns_dataset(records in arb_records()) {
        prop_assert_eq!(ids(filter(&records, &FilterCriteria::new())), ids(&records));
    }

    #[test]
    fn property_sort_is_stable(records in arb_records(), spec in arb_sort()) {
        let sorted = sort(records.iter().collect(), spec);
        for pair in sorted.windows(2) {
            let ordering = spec.compare(pair[0], pair[1]);
            prop_assert_ne!(ordering, Ordering::Greater);
            if ordering == Ordering::Equal {
                // equal keys keep input order, and ids are input positions
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn property_descending_reverses_only_distinct_keys(records in arb_records(), key in prop::sample::select(SortKey::ALL.to_vec())) {
        let asc = SortSpec::ascending(key);
        let desc = SortSpec::descending(key);
        for a in &records {
            for b in &records {
                prop_assert_eq!(desc.compare(a, b), asc.compare(a, b).reverse());
            }
        }

        // within each group of equal keys, both directions keep input order
        let descending = sort(records.iter().collect(), desc);
        for pair in descending.windows(2) {
            if asc.compare(pair[0], pair[1]) == Ordering::Equal {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn property_page_bounds(records in arb_records(), index in 0usize..8, size in 1usize..12) {
        let request = PageRequest::new(index, size).unwrap();
        let page = paginate(&records, request);

        prop_assert_eq!(page.total_count, records.len());
        prop_assert!(page.len() <= size);

        let expected: Vec<u64> = records.iter().skip(index * size).take(size).map(|r| r.id.0).collect();
        prop_assert_eq!(ids(&page.items), expected);

        let meta = page.meta();
        prop_assert_eq!(meta.total_pages, records.len().div_ceil(size));
    }

    #[test]
    fn property_cached_engine_agrees_with_run_query(
        records in arb_records(),
        criteria in arb_criteria(),
        spec in arb_sort(),
        index in 0usize..5,
    ) {
        let mut engine = QueryEngine::new(&records);
        for i in 0..=index {
            let request = PageRequest::new(i, 3).unwrap();
            prop_assert_eq!(
                engine.execute(&criteria, spec, request),
                run_query(&records, &criteria, spec, request)
            );
        }
    }
}
