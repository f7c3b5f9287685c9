use folio_core::consts::PAGE_SECTIONS;
use folio_core::content::{NavLink, Portfolio, SkillIcon};

#[test]
fn test_builtin_content_counts() {
    let p = Portfolio::default();
    assert_eq!(p.projects.len(), 3);
    assert_eq!(p.skills.len(), 6);
    assert_eq!(p.education.len(), 3);
    assert_eq!(p.certifications.len(), 4);
    assert_eq!(p.navigation.len(), 6);
    assert_eq!(p.footer_links.len(), 4);
}

#[test]
fn test_navigation_points_at_page_sections() {
    let p = Portfolio::default();
    for link in p.navigation.iter().chain(&p.footer_links) {
        assert!(
            PAGE_SECTIONS.contains(&link.section.as_str()),
            "{} -> {}",
            link.label,
            link.section
        );
    }
}

#[test]
fn test_nav_link_from_label_lowercases() {
    let link = NavLink::from_label("Certifications");
    assert_eq!(link.label, "Certifications");
    assert_eq!(link.section, "certifications");
}

#[test]
fn test_footer_home_links_to_hero() {
    let p = Portfolio::default();
    assert_eq!(p.footer_links[0].label, "Home");
    assert_eq!(p.footer_links[0].section, "hero");
}

#[test]
fn test_skill_icons() {
    let p = Portfolio::default();
    let icon_of = |name: &str| p.skills.iter().find(|s| s.name == name).unwrap().icon;
    assert_eq!(icon_of("Java"), SkillIcon::Code);
    assert_eq!(icon_of("Node.js"), SkillIcon::Server);
    assert_eq!(icon_of("MySQL"), SkillIcon::Database);
    assert_eq!(format!("{}", SkillIcon::Database), "Database");
}

#[test]
fn test_find_project() {
    let p = Portfolio::default();
    let sky = p.find_project("SkySense").unwrap();
    assert_eq!(sky.tech, vec!["HTML", "CSS", "JavaScript"]);
    assert!(p.find_project("Nope").is_none());
}

#[test]
fn test_profile_mailto() {
    let p = Portfolio::default();
    assert_eq!(p.profile.mailto(), "mailto:londemoresh03@gmail.com");
    assert!(p.profile.resume.ends_with(".pdf"));
}

#[test]
fn test_project_serializes_description_as_desc() {
    let p = Portfolio::default();
    let json = serde_json::to_value(&p.projects[0]).unwrap();
    assert_eq!(json["desc"], "Platform to track medicine expiry & redistribution.");
    assert!(json.get("description").is_none());
}
