use console::Style;
use folio_core::config::{FolioConfig, MotionConfig};
use folio_core::content::Portfolio;
use folio_core::selector::{demo_action, DemoAction};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    accent: Style,
    disabled: Style,
    link: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            accent: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            link: Style::new().underlined(),
        }
    }
}

fn rule(len: usize) -> String {
    "\u{2550}".repeat(len)
}

pub fn print_content_summary(config: &FolioConfig) {
    let s = Styles::new();
    let content = &config.content;
    let profile = &content.profile;

    println!();
    println!("  {}", s.title.apply_to(&profile.name));
    println!("  {}", s.title.apply_to(rule(profile.name.chars().count())));
    println!("  {}", s.value.apply_to(&profile.tagline));
    println!("  {}", s.label.apply_to(&profile.subtitle));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Resume"), s.link.apply_to(&profile.resume));
    println!("  {:<14}{}", s.label.apply_to("Email"), s.link.apply_to(&profile.email));
    println!("  {:<14}{}", s.label.apply_to("LinkedIn"), s.link.apply_to(&profile.linkedin));
    println!("  {:<14}{}", s.label.apply_to("GitHub"), s.link.apply_to(&profile.github));
    println!();

    print_navigation(&s, content);
    print_projects(&s, content);

    // Skills
    println!("  {}", s.header.apply_to("Skills"));
    for skill in &content.skills {
        println!(
            "    {:<12}{}",
            s.value.apply_to(&skill.name),
            s.label.apply_to(skill.icon)
        );
    }
    println!();

    // Education
    println!("  {}", s.header.apply_to("Education"));
    for edu in &content.education {
        println!(
            "    {}  {:<16}{}",
            s.accent.apply_to(&edu.year),
            s.value.apply_to(&edu.degree),
            s.label.apply_to(&edu.detail)
        );
    }
    println!();

    // Certifications
    println!("  {}", s.header.apply_to("Certifications"));
    for cert in &content.certifications {
        println!(
            "    {}  {} {}",
            s.accent.apply_to(&cert.year),
            s.value.apply_to(&cert.title),
            s.label.apply_to(format!("({})", cert.issuer))
        );
    }
    println!();

    print_motion(&s, &config.motion);
}

fn print_navigation(s: &Styles, content: &Portfolio) {
    println!("  {}", s.header.apply_to("Navigation"));
    let links: Vec<String> = content
        .navigation
        .iter()
        .map(|link| format!("{} (#{})", link.label, link.section))
        .collect();
    println!("    {}", s.value.apply_to(links.join("  ")));
    println!();
}

fn print_projects(s: &Styles, content: &Portfolio) {
    println!("  {}", s.header.apply_to("Projects"));
    if content.projects.is_empty() {
        println!("    {}", s.disabled.apply_to("none"));
        println!();
        return;
    }
    for (i, project) in content.projects.iter().enumerate() {
        println!(
            "    {}. {}",
            s.label.apply_to(i + 1),
            s.value.apply_to(&project.title)
        );
        println!("       {}", project.description);
        println!("       {:<8}{}", s.label.apply_to("Tech"), project.tech.join(", "));
        println!("       {:<8}{}", s.label.apply_to("Repo"), s.link.apply_to(&project.repo));
        match demo_action(project) {
            DemoAction::OpenExternal(url) => {
                println!("       {:<8}{}", s.label.apply_to("Demo"), s.link.apply_to(url))
            }
            DemoAction::ShowDetail => println!(
                "       {:<8}{}",
                s.label.apply_to("Demo"),
                s.disabled.apply_to("not available (detail view)")
            ),
        }
    }
    println!();
}

fn print_motion(s: &Styles, motion: &MotionConfig) {
    println!("  {}", s.header.apply_to("Motion"));
    println!(
        "    {:<18}{}",
        s.label.apply_to("Carousel speed"),
        s.value.apply_to(format!("{} px/frame", motion.carousel_speed))
    );
    println!(
        "    {:<18}{}",
        s.label.apply_to("Section threshold"),
        s.value.apply_to(format!("{:.0}% of {}", motion.section_threshold * 100.0, motion.ratio_basis))
    );
    println!(
        "    {:<18}{}",
        s.label.apply_to("Initial section"),
        s.accent.apply_to(&motion.initial_section)
    );
    println!();
}
