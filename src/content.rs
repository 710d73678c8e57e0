//! 落地页的静态文案

pub const SITE_NAME: &str = "CardioNerve";
pub const SITE_URL: &str = "https://cardionerve.com";
pub const PAGE_TITLE: &str = "CardioNerve - Cardiac Risk Detection";
pub const PAGE_DESCRIPTION: &str =
    "Real-time heart health monitoring with AI-powered risk assessment.";

pub struct NavLink {
    pub label: &'static str,
    pub id: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub is_last: bool,
}

pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct ContactDetails {
    pub email: &'static str,
    pub phones: &'static [&'static str],
    pub location: &'static str,
    pub support_hours: &'static str,
}

pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", id: "home" },
    NavLink { label: "Features", id: "features" },
    NavLink { label: "How It Works", id: "how-it-works" },
    NavLink { label: "Privacy", id: "privacy" },
    NavLink { label: "Contact", id: "contact" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "smartphone",
        title: "Real-time Monitoring",
        description: "Seamlessly integrates with leading smartwatches and fitness trackers for continuous cardiac monitoring.",
    },
    Feature {
        icon: "brain",
        title: "AI-Powered Analysis",
        description: "Our advanced AI continuously analyzes your cardiac data to detect potential risks early.",
    },
    Feature {
        icon: "bell",
        title: "Instant Alerts",
        description: "Receive instant notifications for any concerns, ensuring you're always informed about your heart health.",
    },
    Feature {
        icon: "activity",
        title: "Coming Soon",
        description: "More integrations and features coming soon to enhance your cardiac monitoring experience.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Sign Up & Create Profile",
        description: "Sign up and complete your health profile in minutes. Provide essential information to personalize your monitoring experience.",
        is_last: false,
    },
    Step {
        number: 2,
        title: "Link Your Device",
        description: "Link your smartwatch or fitness tracker. We support all major brands including Apple Watch, Fitbit, and Garmin.",
        is_last: false,
    },
    Step {
        number: 3,
        title: "AI Analysis Begins",
        description: "Our AI continuously analyzes your cardiac data in real-time, learning your patterns and detecting anomalies.",
        is_last: false,
    },
    Step {
        number: 4,
        title: "Receive Alerts",
        description: "Receive instant notifications for any concerns. Stay informed and take action when it matters most.",
        is_last: true,
    },
];

pub const PRIVACY_SUMMARY: &str = "We take your privacy seriously. All data is encrypted, \
    HIPAA-compliant, and you maintain full control over your information. \
    Your health data is protected with bank-level security.";

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "End-to-End Encryption",
        description: "Your data is encrypted at rest and in transit",
    },
    Pillar {
        title: "HIPAA Compliant",
        description: "Fully compliant with healthcare regulations",
    },
    Pillar {
        title: "Your Data, Your Control",
        description: "You decide who can access your information",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does CardioNerve work?",
        answer: "CardioNerve integrates with your smartwatch or fitness tracker to continuously monitor \
            your heart rate and other cardiac metrics. Our AI analyzes this data in real-time to detect \
            potential risks and alert you immediately if any concerns are identified.",
    },
    Faq {
        question: "What devices are supported?",
        answer: "We support all major smartwatches and fitness trackers including Apple Watch, Fitbit, \
            Garmin, Samsung Galaxy Watch, and more. Our platform is designed to work seamlessly with any \
            device that tracks heart rate data.",
    },
    Faq {
        question: "Is my data secure?",
        answer: "Absolutely. We use bank-level encryption to protect your data both at rest and in transit. \
            We are fully HIPAA compliant and never share your personal health information without your \
            explicit consent. You maintain complete control over your data.",
    },
    Faq {
        question: "How much does it cost?",
        answer: "We offer a free trial to get you started. After the trial, our subscription plans start \
            at $9.99/month with annual discounts available. All plans include full access to our AI \
            monitoring, instant alerts, and 24/7 support.",
    },
    Faq {
        question: "Can CardioNerve replace my doctor?",
        answer: "No, CardioNerve is designed to complement, not replace, professional medical care. Our \
            platform helps you monitor your heart health and alerts you to potential concerns, but you \
            should always consult with your healthcare provider for medical advice and treatment.",
    },
];

pub const CONTACT_DETAILS: ContactDetails = ContactDetails {
    email: "cardionerve.co@gmail.com",
    phones: &["+91 6360869590", "+91 8296102292"],
    location: "Mangalore, Karnataka, India",
    support_hours: "24/7 Customer Support",
};

pub const SOCIAL_LINKS: &[ExternalLink] = &[
    ExternalLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/company/cardionerve/posts/?feedView=all",
    },
    ExternalLink {
        label: "Instagram",
        href: "https://www.instagram.com/cardionerve.co/",
    },
];
