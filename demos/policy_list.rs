//! Policy list walkthrough: search, sort by header clicks and page through results

use policy_browser::prelude::*;
use policy_browser::storage::fixtures::sample_policies;
use tracing_subscriber::EnvFilter;

fn print_page(title: &str, page: &Page<&PolicyRecord>) {
    let meta = page.meta();
    println!("\n{title}");
    println!(
        "{:<4} {:<46} {:<12} {:<12} {:<16} {:<16} {:<6}",
        "Id",
        SortKey::Name.label(),
        SortKey::InceptionDate.label(),
        SortKey::CreatedDate.label(),
        SortKey::CreatedBy.label(),
        SortKey::ModifiedBy.label(),
        SortKey::Type.label(),
    );
    for record in &page.items {
        println!(
            "{:<4} {:<46} {:<12} {:<12} {:<16} {:<16} {:<6}",
            record.id,
            record.name,
            record.inception_date,
            record.created_date,
            record.created_by,
            record.modified_by,
            record.policy_type,
        );
    }
    println!(
        "page {} of {} ({} matching policies)",
        meta.page_index + 1,
        meta.total_pages.max(1),
        meta.total
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BrowserConfig::default_config();
    let store = InMemoryPolicyStore::new(sample_policies(50));
    let mut engine = QueryEngine::new(store.list_all());
    let mut session = BrowseSession::new(&config)?;

    println!("Policy List");
    println!("===========");

    print_page("All policies", &session.view_with(&mut engine));

    session.search(
        FilterCriteria::new()
            .with_name("insurance")
            .with_type(PolicyType::Closed),
    );
    print_page("Closed insurance policies", &session.view_with(&mut engine));

    session.request_sort(SortKey::CreatedDate);
    session.request_sort(SortKey::CreatedDate);
    print_page("Newest first", &session.view_with(&mut engine));

    session.go_to_page(1);
    print_page("Next page", &session.view_with(&mut engine));

    session.reset();
    session.search(
        FilterCriteria::new().created_between(Some(parse_date("2023-01-01")?), None),
    );
    print_page("Created since 2023", &session.view_with(&mut engine));

    Ok(())
}
