// =============================================================================
// NexusCorp Common - Content Types
// =============================================================================
// Table of Contents:
// 1. Services
// 2. People
// 3. Blog
// 4. Company History
// 5. Case Studies
// 6. Page Chrome (nav, about, contact, footer)
// =============================================================================
// All content is authored at compile time, so every string is `&'static str`
// and every list is a `&'static` slice.
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Services
// -----------------------------------------------------------------------------

/// Glyph shown on a service card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Briefcase,
    BarChart,
    Layout,
}

/// One of the firm's service pillars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOffering {
    /// Unique within the catalog.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ServiceIcon,
    /// Display order is slice order.
    pub features: &'static [&'static str],
    pub image: &'static str,
}

// -----------------------------------------------------------------------------
// 2. People
// -----------------------------------------------------------------------------

/// Executive shown in the team roster. The name doubles as the list key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

// -----------------------------------------------------------------------------
// 3. Blog
// -----------------------------------------------------------------------------

/// Article teaser in the insights section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    /// Unique within the catalog.
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    /// Display string, never parsed.
    pub date: &'static str,
    pub author: &'static str,
}

// -----------------------------------------------------------------------------
// 4. Company History
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

// -----------------------------------------------------------------------------
// 5. Case Studies
// -----------------------------------------------------------------------------

/// Headline number shown under a case study's before/after pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpactMetric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub client: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub impact: ImpactMetric,
}

// -----------------------------------------------------------------------------
// 6. Page Chrome
// -----------------------------------------------------------------------------

/// In-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Element id of the target section, without the leading `#`.
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Figure with a caption, used by the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Phone,
    Email,
    Address,
}

/// Way of reaching the firm, listed beside the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub title: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

/// Image references used outside the entity collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteImages {
    pub hero: &'static str,
    pub about: &'static str,
}
