/// Static marketing copy for the home and about pages.
use lungai_core::catalog::Accent;

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HERO_TITLE: &str = "AI-Powered Lung Disease";
pub const HERO_SUBTITLE: &str = "Detection & Analysis";
pub const HERO_BODY: &str = "Get instant AI-powered analysis of lung conditions. Input your symptoms \
    to find relevant diseases, then upload X-ray images for detailed diagnostic assistance.";
pub const SYMPTOM_HINT: &str =
    "Describe your symptoms (e.g., chest pain, shortness of breath, cough...)";

pub const HOME_STATS: &[Stat] = &[
    Stat { value: "95%", label: "Accuracy Rate", accent: Accent::Blue },
    Stat { value: "10+", label: "Disease Types", accent: Accent::Green },
    Stat { value: "1000+", label: "Analyses Completed", accent: Accent::Purple },
];

pub const HOME_STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Input Symptoms",
        description: "Describe your symptoms to find relevant lung conditions",
    },
    Step {
        number: 2,
        title: "Upload X-Ray",
        description: "Upload your chest X-ray for AI analysis",
    },
    Step {
        number: 3,
        title: "Get Analysis",
        description: "Receive detailed probability scores and insights",
    },
];

pub const ABOUT_INTRO: &str = "LungAI is an advanced artificial intelligence platform designed to \
    assist in the early detection and analysis of lung diseases through chest X-ray interpretation.";

pub const MISSION: &[&str] = &[
    "We believe that advanced medical diagnostics should be accessible to everyone. LungAI \
     democratizes lung disease detection by providing AI-powered analysis that can assist \
     healthcare providers and patients worldwide.",
    "Our goal is to enable early detection of lung conditions, potentially saving lives through \
     timely intervention and treatment.",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧠",
        title: "AI-Powered Analysis",
        description: "Advanced machine learning algorithms trained on thousands of chest X-rays \
                      for accurate disease detection.",
    },
    Feature {
        icon: "🔒",
        title: "Privacy First",
        description: "Your medical data is processed securely and never stored. All analysis \
                      happens in real-time.",
    },
    Feature {
        icon: "🌍",
        title: "Accessible Healthcare",
        description: "Bringing advanced diagnostic tools to everyone, regardless of location or \
                      economic status.",
    },
    Feature {
        icon: "✔",
        title: "Clinical Accuracy",
        description: "95% accuracy rate validated through extensive testing with medical \
                      professionals.",
    },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "95%", label: "Accuracy Rate", accent: Accent::Blue },
    Stat { value: "10+", label: "Diseases Detected", accent: Accent::Green },
    Stat { value: "1,000+", label: "X-rays Analyzed", accent: Accent::Purple },
    Stat { value: "<3s", label: "Response Time", accent: Accent::Orange },
];

pub const ABOUT_STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Input Symptoms",
        description: "Start by describing your symptoms or browse our disease library to find \
                      relevant conditions.",
    },
    Step {
        number: 2,
        title: "Upload X-Ray",
        description: "Upload a clear chest X-ray image in common formats (PNG, JPG) for AI \
                      analysis.",
    },
    Step {
        number: 3,
        title: "Get Results",
        description: "Receive instant analysis with confidence scores and recommendations for \
                      next steps.",
    },
];

pub const DISCLAIMER_TITLE: &str = "Important Medical Disclaimer";
pub const DISCLAIMER: &str = "LungAI is designed to assist healthcare professionals and provide \
    educational information. It is not intended to replace professional medical advice, \
    diagnosis, or treatment. Always consult with qualified healthcare providers for medical \
    decisions. Never disregard professional medical advice or delay seeking treatment based on \
    LungAI results.";

/// Shown above every result.
pub const MOCK_BANNER: &str = "Demonstration only: this build has no model. Scores are random \
    numbers and do not describe your X-ray.";
