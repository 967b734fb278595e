//! Built-in sample collections served by list endpoints when the content
//! store is unreachable or still empty, so the public site always has
//! something to render. Constructed fresh per call; nothing here is shared
//! mutable state.

use chrono::Utc;
use uuid::Uuid;

use crate::entities::{
    blog_post::BlogPost,
    project::Project,
    skill::{Skill, SkillLevel},
};

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: Uuid::from_u128(1),
            title: "E-Commerce Platform".to_string(),
            description: "A full-stack e-commerce solution with cart, checkout, and payment integration.".to_string(),
            tech_stack: to_strings(&["React", "Node.js", "MongoDB", "Stripe"]),
            github_link: Some("https://github.com".to_string()),
            live_link: Some("https://demo.com".to_string()),
            images: None,
            featured: true,
            created_at: Utc::now(),
        },
        Project {
            id: Uuid::from_u128(2),
            title: "Portfolio Website".to_string(),
            description: "Modern portfolio with animations, dark mode, and CMS integration.".to_string(),
            tech_stack: to_strings(&["Next.js", "TypeScript", "Tailwind CSS"]),
            github_link: Some("https://github.com".to_string()),
            live_link: Some("https://demo.com".to_string()),
            images: None,
            featured: true,
            created_at: Utc::now(),
        },
        Project {
            id: Uuid::from_u128(3),
            title: "Task Management App".to_string(),
            description: "Collaborative task manager with real-time updates and team features.".to_string(),
            tech_stack: to_strings(&["React", "Firebase", "Redux"]),
            github_link: Some("https://github.com".to_string()),
            live_link: Some("https://demo.com".to_string()),
            images: None,
            featured: true,
            created_at: Utc::now(),
        },
    ]
}

pub fn sample_skills() -> Vec<Skill> {
    let entries: [(&str, &str, &str, SkillLevel); 12] = [
        ("React", "FaReact", "Frontend", SkillLevel::Advanced),
        ("Next.js", "SiNextdotjs", "Frontend", SkillLevel::Advanced),
        ("TypeScript", "SiTypescript", "Language", SkillLevel::Advanced),
        ("Node.js", "FaNodeJs", "Backend", SkillLevel::Advanced),
        ("Tailwind CSS", "SiTailwindcss", "Frontend", SkillLevel::Advanced),
        ("Git", "SiGit", "Tool", SkillLevel::Advanced),
        ("MongoDB", "SiMongodb", "Database", SkillLevel::Intermediate),
        ("PostgreSQL", "SiPostgresql", "Database", SkillLevel::Intermediate),
        ("GraphQL", "SiGraphql", "API", SkillLevel::Intermediate),
        ("Prisma", "SiPrisma", "ORM", SkillLevel::Intermediate),
        ("Docker", "SiDocker", "DevOps", SkillLevel::Beginner),
        ("Figma", "SiFigma", "Design", SkillLevel::Beginner),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (name, icon, category, level))| Skill {
            id: Uuid::from_u128(i as u128 + 1),
            name: name.to_string(),
            category: category.to_string(),
            level: *level,
            icon: Some(icon.to_string()),
            visible: true,
        })
        .collect()
}

pub fn sample_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: Uuid::from_u128(1),
            title: "Getting Started with Next.js 14".to_string(),
            slug: "getting-started-nextjs-14".to_string(),
            content: "Learn how to build modern web applications with Next.js 14 and its powerful features.".to_string(),
            meta_description: Some("A practical introduction to Next.js 14.".to_string()),
            published: true,
            created_at: Utc::now(),
        },
        BlogPost {
            id: Uuid::from_u128(2),
            title: "Mastering TypeScript".to_string(),
            slug: "mastering-typescript".to_string(),
            content: "A comprehensive guide to TypeScript for building type-safe applications.".to_string(),
            meta_description: Some("TypeScript patterns for type-safe codebases.".to_string()),
            published: true,
            created_at: Utc::now(),
        },
        BlogPost {
            id: Uuid::from_u128(3),
            title: "React Best Practices".to_string(),
            slug: "react-best-practices".to_string(),
            content: "Essential tips and patterns for writing clean, maintainable React code.".to_string(),
            meta_description: Some("Patterns for clean, maintainable React.".to_string()),
            published: true,
            created_at: Utc::now(),
        },
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
