pub const PAGE_TITLE: &str = "Neuronova | Future-Ready Learning";
pub const PAGE_DESCRIPTION: &str = "Neuronova is the modern learning platform helping ambitious students master in-demand skills with personalized mentorship and social learning journeys.";

// Inter carries body copy, Poppins carries headings.
pub const FONTS_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Poppins:wght@500;600;700&display=swap";

pub const BOOKING_URL: &str = "https://cal.com";
pub const CONTACT_MAILTO: &str = "mailto:hello@neuronova.io";
pub const BLOG_URL: &str = "https://blog.neuronova.io";
pub const GUIDE_URL: &str = "https://neuronova.io/guide";
pub const PRIVACY_URL: &str = "https://neuronova.io/privacy";
