//! Display copy of the landing page
//!
//! Everything here is fixed marketing content. The processing metrics in
//! particular are constants, not measurements.

use serde::Serialize;

pub const PRODUCT_NAME: &str = "NanoBanana";
pub const LOGO: &str = "🍌";

/// In-page navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "Showcase", href: "#showcase" },
    NavLink { label: "Reviews", href: "#testimonials" },
    NavLink { label: "FAQ", href: "#faq" },
];

pub const CALL_TO_ACTION: &str = "Get Started";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub tagline: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    headline: "Transform Your Images with",
    highlight: "AI Intelligence",
    tagline: "Professional-grade image processing powered by cutting-edge AI. \
              Upload, analyze, and enhance your images in seconds.",
    primary_action: "Start Processing",
    secondary_action: "View Demo",
};

/// Hint shown inside the empty drop zone
pub const UPLOAD_HINT: &str = "PNG, JPG, WebP up to 10MB";

/// A static figure in the "Processing Results" panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayMetric {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROCESSING_RESULTS: &[DisplayMetric] = &[
    DisplayMetric { label: "Image Quality", value: "98%" },
    DisplayMetric { label: "Processing Time", value: "0.3s" },
    DisplayMetric { label: "AI Confidence", value: "99.7%" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowcaseCase {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
}

pub const SHOWCASE: &[ShowcaseCase] = &[
    ShowcaseCase {
        id: 1,
        title: "E-commerce Product Enhancement",
        description: "Automatically enhance and optimize product images for online stores",
        image: "/ecommerce-product-showcase-with-enhanced-quality.jpg",
        category: "Retail",
    },
    ShowcaseCase {
        id: 2,
        title: "Real Estate Photography",
        description: "Professional photo enhancement for property listings and marketing",
        image: "/modern-real-estate-property-interior-design.jpg",
        category: "Real Estate",
    },
    ShowcaseCase {
        id: 3,
        title: "Social Media Optimization",
        description: "Perfect your images for maximum engagement across platforms",
        image: "/vibrant-social-media-content-creation-setup.jpg",
        category: "Marketing",
    },
    ShowcaseCase {
        id: 4,
        title: "Medical Imaging Analysis",
        description: "AI-powered medical image analysis and diagnostics support",
        image: "/medical-imaging-healthcare-technology.jpg",
        category: "Healthcare",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub avatar: &'static str,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    /// Rating as a row of filled and empty stars
    pub fn stars(&self) -> String {
        let filled = self.rating.min(Self::MAX_RATING) as usize;
        let empty = Self::MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Chen",
        role: "E-commerce Manager",
        content: "NanoBanana has revolutionized our product photography workflow. \
                  The AI enhancement is incredibly fast and produces professional results.",
        rating: 5,
        avatar: "👩‍💼",
    },
    Testimonial {
        id: 2,
        name: "Michael Rodriguez",
        role: "Real Estate Agent",
        content: "The image quality improvement is remarkable. Our property listings now \
                  look premium without expensive professional photographers.",
        rating: 5,
        avatar: "👨‍💼",
    },
    Testimonial {
        id: 3,
        name: "Emma Thompson",
        role: "Content Creator",
        content: "Perfect tool for social media. The AI understands context and enhances \
                  images while keeping them looking natural.",
        rating: 5,
        avatar: "👩‍🎨",
    },
    Testimonial {
        id: 4,
        name: "David Kumar",
        role: "Marketing Director",
        content: "The efficiency gains are substantial. We process 10x more images per day \
                  while maintaining quality standards.",
        rating: 5,
        avatar: "👨‍💻",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: 0,
        question: "What image formats does NanoBanana support?",
        answer: "We support all major image formats including PNG, JPG, WebP, JPEG, and GIF. \
                 Files up to 10MB can be processed.",
    },
    FaqEntry {
        id: 1,
        question: "How long does image processing take?",
        answer: "Most images are processed in under 1 second. Processing time depends on image \
                 size and complexity, but typically ranges from 0.2 to 3 seconds.",
    },
    FaqEntry {
        id: 2,
        question: "Is my data secure and private?",
        answer: "Absolutely. All images are processed with enterprise-grade encryption and are \
                 automatically deleted after processing. We never store or share your data.",
    },
    FaqEntry {
        id: 3,
        question: "Can I use NanoBanana for commercial purposes?",
        answer: "Yes, commercial use is fully supported with our Pro and Enterprise plans. \
                 Images processed are yours to use freely.",
    },
    FaqEntry {
        id: 4,
        question: "What is the pricing model?",
        answer: "We offer flexible pricing: Free plan (5 images/month), Pro ($29/month, \
                 unlimited), and Enterprise (custom). No credit card required for free tier.",
    },
    FaqEntry {
        id: 5,
        question: "Do you offer API access?",
        answer: "Yes! We provide a powerful REST API and SDKs for Python, Node.js, and Go. \
                 Perfect for integrating into your applications.",
    },
];

/// Column of dead-end footer links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_BLURB: &str = "Advanced AI-powered image processing for professionals worldwide.";

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &["Features", "Pricing", "API Docs", "Blog"],
    },
    FooterColumn {
        heading: "Company",
        links: &["About", "Careers", "Contact", "Press"],
    },
    FooterColumn {
        heading: "Legal",
        links: &["Privacy", "Terms", "Security", "Cookies"],
    },
];

pub const SOCIAL_LINKS: &[&str] = &["Twitter", "GitHub", "LinkedIn"];

pub const COPYRIGHT: &str = "© 2025 NanoBanana. All rights reserved.";
