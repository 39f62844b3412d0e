#![allow(dead_code)]

//! Static project catalog. Read-only, compiled in, never mutated — the
//! single source of truth the recommendation flow grounds its prompt on.

/// One portfolio project as shown on the site and fed to the recommender
/// as prompt context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub featured: bool,
    pub year: u16,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "servicebridge",
        title: "ServiceBridge",
        description: "Real-time service marketplace connecting 10,000+ users",
        long_description: "Architected a high-scale marketplace platform connecting service \
            providers with customers in real-time. Implemented WebSocket-based matching, Redis \
            caching for 40% latency reduction, and PostgreSQL with read replicas for \
            high-traffic queries.",
        category: "Web Application",
        tags: &["Real-time", "Marketplace", "WebSockets", "Redis"],
        tech: &[
            "React",
            "Node.js",
            "PostgreSQL",
            "Redis",
            "Socket.io",
            "TensorFlow.js",
        ],
        live_url: Some("https://servicebridge.netlify.app/"),
        github_url: None,
        featured: true,
        year: 2023,
    },
    Project {
        id: "teenspray",
        title: "TeensPray",
        description: "Community platform with modern responsive design",
        long_description: "Built a responsive community website focused on youth engagement. \
            Implemented modern frontend practices with performance optimization and SEO best \
            practices.",
        category: "Website",
        tags: &["Community", "Responsive", "Frontend"],
        tech: &["HTML5", "CSS3", "JavaScript", "Responsive Design"],
        live_url: Some("https://teenspray.netlify.app/"),
        github_url: None,
        featured: false,
        year: 2022,
    },
    Project {
        id: "subscription-manager",
        title: "Subscription Manager",
        description: "Automated recurring payment system with API integration",
        long_description: "Developed a robust backend system for managing recurring \
            subscriptions. Integrated payment gateway APIs, implemented webhook handlers, and \
            built automated billing cycles.",
        category: "Backend System",
        tags: &["Payments", "API", "Automation"],
        tech: &["Node.js", "Express", "PostgreSQL", "Payment APIs"],
        live_url: None,
        github_url: Some("https://github.com/thewebguyy/seerbit-subscription-manager"),
        featured: true,
        year: 2023,
    },
    Project {
        id: "55lounge",
        title: "55Lounge",
        description: "Full-stack booking platform for hospitality services",
        long_description: "Created a comprehensive booking system with real-time availability, \
            payment processing, and customer management. Focused on user experience and \
            performance optimization.",
        category: "Web Application",
        tags: &["Booking System", "Full-Stack", "Payments"],
        tech: &["React", "Node.js", "MongoDB", "Payment Integration"],
        live_url: Some("https://55lounge.ng/"),
        github_url: None,
        featured: true,
        year: 2024,
    },
    Project {
        id: "checkout-system",
        title: "Checkout System",
        description: "Secure payment gateway integration for e-commerce",
        long_description: "Implemented a secure checkout system with multiple payment gateway \
            support. Built with PCI compliance in mind and optimized for conversion rates.",
        category: "API Integration",
        tags: &["Payments", "Security", "API"],
        tech: &["JavaScript", "Payment APIs", "Security"],
        live_url: None,
        github_url: Some("https://github.com/thewebguyy/simpleseerbitcheckout"),
        featured: false,
        year: 2023,
    },
    Project {
        id: "laverita-hair",
        title: "La Verita Hair",
        description: "E-commerce platform for hair products",
        long_description: "Developed a modern e-commerce website with product catalog, \
            shopping cart, and checkout flow. Optimized for mobile users and search engines.",
        category: "E-commerce",
        tags: &["E-commerce", "Frontend", "SEO"],
        tech: &["HTML5", "CSS3", "JavaScript", "E-commerce"],
        live_url: Some("http://laveritahair.com/"),
        github_url: None,
        featured: false,
        year: 2022,
    },
];

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).collect()
}

/// Case-insensitive keyword search over title, description, tags and tech.
pub fn search_projects(query: &str) -> Vec<&'static Project> {
    let query = query.to_lowercase();
    PROJECTS
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&query))
                || p.tech.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .collect()
}
