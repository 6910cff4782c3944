// =============================================================================
// NexusCorp Common - Site Catalog
// =============================================================================
// Table of Contents:
// 1. Images
// 2. Collections
// 3. Page Chrome Content
// 4. Catalog
// 5. Validation
// =============================================================================

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::types::*;

// -----------------------------------------------------------------------------
// 1. Images
// -----------------------------------------------------------------------------

macro_rules! image {
    ($file:literal) => {
        concat!(
            "https://storage.googleapis.com/dala-staging-public-data-storage/generated-images/692e25a5-17d1-40f2-a204-9773ad77e53c/",
            $file
        )
    };
}

pub const IMAGES: SiteImages = SiteImages {
    hero: image!("hero-bg-f8636a8a-1770825261087.webp"),
    about: image!("about-us-team-9d4ce70f-1770825261175.webp"),
};

// -----------------------------------------------------------------------------
// 2. Collections
// -----------------------------------------------------------------------------

pub static SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        id: "consulting",
        title: "Strategic Consulting",
        description: "Expert guidance to navigate complex market dynamics and drive sustainable growth.",
        icon: ServiceIcon::Briefcase,
        features: &["Market Analysis", "Risk Assessment", "Operational Efficiency"],
        image: image!("service-consulting-f8ce78b5-1770825260863.webp"),
    },
    ServiceOffering {
        id: "analytics",
        title: "Data Analytics",
        description: "Transform raw data into actionable insights with our advanced analytical tools.",
        icon: ServiceIcon::BarChart,
        features: &["Predictive Modeling", "Real-time Dashboards", "Big Data Architecture"],
        image: image!("service-analytics-b5865982-1770825267549.webp"),
    },
    ServiceOffering {
        id: "digital",
        title: "Digital Transformation",
        description: "Modernize your operations with cutting-edge technology and cloud solutions.",
        icon: ServiceIcon::Layout,
        features: &["Cloud Migration", "AI Integration", "Legacy System Updates"],
        image: image!("service-digital-cfa52986-1770825260770.webp"),
    },
];

pub static TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Sarah Chen",
        role: "Chief Strategy Officer",
        image: image!("team-1-9efabc51-1770825266129.webp"),
        bio: "With 15 years of experience in Fortune 500 consulting, Sarah leads our strategic vision.",
    },
    TeamMember {
        name: "Marcus Thorne",
        role: "Head of Innovation",
        image: image!("team-2-545cefbc-1770825261373.webp"),
        bio: "Former tech founder with a passion for disruptive technology and digital growth.",
    },
    TeamMember {
        name: "David Miller",
        role: "Principal Advisor",
        image: image!("team-3-e2ff3494-1770825261414.webp"),
        bio: "Expert in corporate governance and global market expansion strategies.",
    },
];

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        id: "1",
        title: "The Future of AI in Enterprise Strategy",
        excerpt: "How generative AI is reshaping the way corporate leaders approach long-term planning.",
        category: "Technology",
        date: "Oct 12, 2023",
        author: "Sarah Chen",
    },
    BlogPost {
        id: "2",
        title: "Sustainable Business Practices in 2024",
        excerpt: "Why ESG reporting is no longer optional for modern corporations.",
        category: "Corporate",
        date: "Nov 05, 2023",
        author: "David Miller",
    },
    BlogPost {
        id: "3",
        title: "Remote Work and Team Cohesion",
        excerpt: "Strategies for maintaining culture in a hybrid and global workspace.",
        category: "Leadership",
        date: "Dec 01, 2023",
        author: "Marcus Thorne",
    },
];

pub static TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        year: "2010",
        title: "Inception",
        description: "Founded in San Francisco with a vision to modernize consulting.",
    },
    TimelineEntry {
        year: "2015",
        title: "Global Expansion",
        description: "Opened offices in London and Singapore to serve international clients.",
    },
    TimelineEntry {
        year: "2019",
        title: "Tech Integration",
        description: "Launched our proprietary data analytics platform.",
    },
    TimelineEntry {
        year: "2023",
        title: "Sustainability Leader",
        description: "Certified as a carbon-neutral consulting firm.",
    },
];

pub static CASE_STUDIES: [CaseStudy; 1] = [CaseStudy {
    id: "1",
    client: "Global Logistics Corp",
    challenge: "Inefficient supply chain leading to 15% revenue leakage annually.",
    solution: "Implemented IoT-based tracking and predictive maintenance algorithms.",
    before: "Manual tracking, 72h delay",
    after: "Real-time data, <2h delay",
    impact: ImpactMetric {
        value: "32%",
        label: "Efficiency Increase",
    },
}];

// -----------------------------------------------------------------------------
// 3. Page Chrome Content
// -----------------------------------------------------------------------------

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Services", anchor: "services" },
    NavLink { label: "Team", anchor: "team" },
    NavLink { label: "Blog", anchor: "blog" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub static ABOUT_PILLARS: [&str; 3] = [
    "Data-driven decision making",
    "Human-centric design",
    "Agile implementation methodologies",
];

pub static COMPANY_STATS: [Stat; 2] = [
    Stat { value: "500+", label: "Global Clients" },
    Stat { value: "98%", label: "Retention Rate" },
];

/// Badge overlapping the about image.
pub const EXPERIENCE_BADGE: Stat = Stat {
    value: "15+",
    label: "Years of Industry Excellence",
};

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        kind: ChannelKind::Phone,
        title: "Call Us",
        value: "+1 (555) NEXUS-01",
    },
    ContactChannel {
        kind: ChannelKind::Email,
        title: "Email Us",
        value: "solutions@nexuscorp.com",
    },
    ContactChannel {
        kind: ChannelKind::Address,
        title: "Visit Us",
        value: "100 Innovation Way, San Francisco, CA",
    },
];

pub static FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        heading: "Services",
        links: &[
            "Strategy Consulting",
            "Digital Transformation",
            "Data Analytics",
            "Cybersecurity",
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &["About Us", "Careers", "Newsroom", "Contact"],
    },
];

pub static LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Settings"];

// -----------------------------------------------------------------------------
// 4. Catalog
// -----------------------------------------------------------------------------

/// Every dataset the page renders, populated once at compile time.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    pub images: SiteImages,
    pub services: &'static [ServiceOffering],
    pub team: &'static [TeamMember],
    pub blog_posts: &'static [BlogPost],
    pub timeline: &'static [TimelineEntry],
    pub case_studies: &'static [CaseStudy],
    pub nav_links: &'static [NavLink],
    pub about_pillars: &'static [&'static str],
    pub company_stats: &'static [Stat],
    pub contact_channels: &'static [ContactChannel],
    pub footer_columns: &'static [FooterColumn],
    pub legal_links: &'static [&'static str],
}

pub static CATALOG: Catalog = Catalog {
    images: IMAGES,
    services: &SERVICES,
    team: &TEAM,
    blog_posts: &BLOG_POSTS,
    timeline: &TIMELINE,
    case_studies: &CASE_STUDIES,
    nav_links: &NAV_LINKS,
    about_pillars: &ABOUT_PILLARS,
    company_stats: &COMPANY_STATS,
    contact_channels: &CONTACT_CHANNELS,
    footer_columns: &FOOTER_COLUMNS,
    legal_links: &LEGAL_LINKS,
};

// -----------------------------------------------------------------------------
// 5. Validation
// -----------------------------------------------------------------------------

/// Returns the first key that occurs more than once.
fn first_duplicate<I>(keys: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'static str>,
{
    let mut seen = HashSet::new();
    keys.into_iter().find(|key| !seen.insert(*key))
}

impl Catalog {
    /// Check the uniqueness invariants the views rely on for list keys.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(id) = first_duplicate(self.services.iter().map(|s| s.id)) {
            return Err(CatalogError::DuplicateServiceId(id));
        }
        if let Some(id) = first_duplicate(self.blog_posts.iter().map(|p| p.id)) {
            return Err(CatalogError::DuplicateBlogPostId(id));
        }
        if let Some(id) = first_duplicate(self.case_studies.iter().map(|c| c.id)) {
            return Err(CatalogError::DuplicateCaseStudyId(id));
        }
        if let Some(name) = first_duplicate(self.team.iter().map(|m| m.name)) {
            return Err(CatalogError::DuplicateTeamMember(name));
        }
        if let Some(year) = first_duplicate(self.timeline.iter().map(|t| t.year)) {
            return Err(CatalogError::DuplicateTimelineYear(year));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_catalog_is_valid() {
        assert_eq!(CATALOG.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_blog_id_is_reported() {
        let posts = vec![BLOG_POSTS[0], BLOG_POSTS[0]];
        let catalog = Catalog {
            blog_posts: Box::leak(posts.into_boxed_slice()),
            ..CATALOG
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateBlogPostId("1"))
        );
    }

    #[test]
    fn test_duplicate_team_name_is_reported() {
        let team = vec![TEAM[0], TEAM[1], TEAM[2], TEAM[1]];
        let catalog = Catalog {
            team: Box::leak(team.into_boxed_slice()),
            ..CATALOG
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateTeamMember("Marcus Thorne"))
        );
    }

    #[test]
    fn test_timeline_is_authored_in_year_order() {
        let years: Vec<u32> = CATALOG
            .timeline
            .iter()
            .map(|t| t.year.parse().unwrap())
            .collect();
        let mut sorted = years.clone();
        sorted.sort_unstable();
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_nav_links_cover_section_anchors() {
        let anchors: Vec<&str> = CATALOG.nav_links.iter().map(|l| l.anchor).collect();
        assert_eq!(anchors, ["about", "services", "team", "blog", "contact"]);
        assert_eq!(CATALOG.nav_links[3].href(), "#blog");
    }

    #[test]
    fn test_images_live_on_image_host() {
        let host = image!("");
        assert!(CATALOG.images.hero.starts_with(host));
        assert!(CATALOG.images.about.starts_with(host));
        assert!(CATALOG.services.iter().all(|s| s.image.starts_with(host)));
        assert!(CATALOG.team.iter().all(|m| m.image.starts_with(host)));
    }
}
