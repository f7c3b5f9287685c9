use folio_core::content::{Portfolio, Project};
use folio_core::selector::{demo_action, DemoAction, DetailView, ProjectSelector};

fn project(title: &str, demo: &str) -> Project {
    Project {
        title: title.into(),
        description: format!("{title} description"),
        tech: vec!["Rust".into()],
        repo: format!("https://example.com/{title}"),
        demo: demo.into(),
        img: String::new(),
    }
}

#[test]
fn test_select_then_clear_returns_to_empty() {
    let mut selector = ProjectSelector::new();
    assert!(selector.active().is_none());

    let p = project("NoDemo", "#");
    selector.select(&p);
    assert!(selector.is_open());
    assert_eq!(selector.active().map(|p| p.title.as_str()), Some("NoDemo"));

    selector.clear();
    assert!(selector.active().is_none());
    assert!(selector.detail().is_none());
}

#[test]
fn test_last_selection_wins() {
    let mut selector = ProjectSelector::new();
    selector.select(&project("One", "#"));
    selector.select(&project("Two", "#"));
    assert_eq!(selector.active().unwrap().title, "Two");
}

#[test]
fn test_clear_when_empty_is_noop() {
    let mut selector = ProjectSelector::new();
    selector.clear();
    assert!(!selector.is_open());
}

#[test]
fn test_detail_placeholder_without_demo() {
    let mut selector = ProjectSelector::new();
    selector.select(&project("NoDemo", "#"));
    match selector.detail() {
        Some(DetailView::Unavailable { project }) => assert_eq!(project.title, "NoDemo"),
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn test_detail_embeds_reachable_demo() {
    let mut selector = ProjectSelector::new();
    selector.select(&project("Live", "https://live.example.com"));
    let detail = selector.detail().unwrap();
    assert_eq!(
        detail,
        DetailView::Embedded {
            project: selector.active().unwrap(),
            url: "https://live.example.com",
        }
    );
    assert_eq!(detail.project().title, "Live");
}

#[test]
fn test_demo_action() {
    assert_eq!(demo_action(&project("a", "#")), DemoAction::ShowDetail);
    assert_eq!(demo_action(&project("b", "")), DemoAction::ShowDetail);
    assert_eq!(demo_action(&project("c", "  ")), DemoAction::ShowDetail);
    assert_eq!(
        demo_action(&project("d", "https://d.dev")),
        DemoAction::OpenExternal("https://d.dev")
    );
}

#[test]
fn test_builtin_projects_all_use_detail_view() {
    let portfolio = Portfolio::default();
    assert_eq!(portfolio.projects_without_demo().count(), portfolio.projects.len());
    for p in &portfolio.projects {
        assert_eq!(demo_action(p), DemoAction::ShowDetail);
    }
}
