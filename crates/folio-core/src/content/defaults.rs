//! Built-in page content.

use super::types::{Certification, Education, NavLink, Profile, Project, Skill, SkillIcon};

pub fn profile() -> Profile {
    Profile {
        name: "Moresh Londe".into(),
        tagline: "Building smart solutions, one project at a time".into(),
        subtitle: "Full Stack Developer | Building Future-Ready Web Apps".into(),
        about: "Fresher software developer pursuing MCA. Skilled in Java, Python, C/C++, \
                React, Node.js, MySQL, MongoDB. Certified in Postman API, SQL, Git, and \
                Automation Anywhere. Passionate about creating impactful, user-focused \
                software solutions."
            .into(),
        resume: "Moresh_Londe.pdf".into(),
        email: "londemoresh03@gmail.com".into(),
        linkedin: "https://linkedin.com/in/moreshlonde".into(),
        github: "https://github.com/MOreshhhhh".into(),
        contact_blurb: "Feel free to reach out via email or connect with me on LinkedIn and GitHub."
            .into(),
        copyright: "© 2025 Moresh Londe. All rights reserved.".into(),
    }
}

fn project(title: &str, description: &str, tech: &[&str], repo: &str, img: &str) -> Project {
    Project {
        title: title.into(),
        description: description.into(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        repo: repo.into(),
        demo: "#".into(),
        img: img.into(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "MedBridge",
            "Platform to track medicine expiry & redistribution.",
            &["React", "Node.js", "MongoDB"],
            "https://github.com/username/medbridge",
            "images/medbridge.png",
        ),
        project(
            "SkySense",
            "Web app to monitor air quality with OpenWeather API.",
            &["HTML", "CSS", "JavaScript"],
            "https://github.com/username/skysense",
            "images/skysense.png",
        ),
        project(
            "Mental Health Chatbot",
            "AI-powered chatbot providing mental health resources.",
            &["HTML", "CSS", "JS", "OpenAI API"],
            "https://github.com/username/mental-health-chatbot",
            "images/chatbot.png",
        ),
    ]
}

pub fn skills() -> Vec<Skill> {
    [
        ("Java", SkillIcon::Code),
        ("Python", SkillIcon::Code),
        ("React", SkillIcon::Code),
        ("Node.js", SkillIcon::Server),
        ("MongoDB", SkillIcon::Database),
        ("MySQL", SkillIcon::Database),
    ]
    .into_iter()
    .map(|(name, icon)| Skill {
        name: name.into(),
        icon,
    })
    .collect()
}

pub fn education() -> Vec<Education> {
    [
        ("2025", "MCA (Ongoing)", "CGPA 8.42/7.84"),
        ("2022", "BSc IT", "CGPA 8.63"),
        ("2019", "HSC", "90.67%"),
    ]
    .into_iter()
    .map(|(year, degree, detail)| Education {
        year: year.into(),
        degree: degree.into(),
        detail: detail.into(),
    })
    .collect()
}

pub fn certifications() -> Vec<Certification> {
    [
        ("Postman API Fundamentals", "Postman Academy", "2024"),
        ("SQL Certification", "HackerRank", "2024"),
        (
            "Automation Anywhere Advanced RPA",
            "Automation Anywhere University",
            "2023",
        ),
        ("Git & GitHub Essentials", "Coursera", "2023"),
    ]
    .into_iter()
    .map(|(title, issuer, year)| Certification {
        title: title.into(),
        issuer: issuer.into(),
        year: year.into(),
    })
    .collect()
}

pub fn navigation() -> Vec<NavLink> {
    ["About", "Projects", "Skills", "Education", "Certifications", "Contact"]
        .into_iter()
        .map(NavLink::from_label)
        .collect()
}

pub fn footer_links() -> Vec<NavLink> {
    vec![
        NavLink {
            label: "Home".into(),
            section: "hero".into(),
        },
        NavLink::from_label("Projects"),
        NavLink::from_label("Skills"),
        NavLink::from_label("Education"),
    ]
}
