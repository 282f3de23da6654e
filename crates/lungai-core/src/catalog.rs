//! Static catalog of lung conditions shown in the disease library.
//!
//! The catalog is compiled into the binary and never changes at runtime.
//! All lookups preserve declaration order; none of them sort.

/// Severity band of a condition, as shown on cards and detail views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    MildToModerate,
    MildToSevere,
    ModerateToSevere,
    Severe,
}

impl Severity {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::MildToModerate => "Mild to Moderate",
            Self::MildToSevere => "Mild to Severe",
            Self::ModerateToSevere => "Moderate to Severe",
            Self::Severe => "Severe",
        }
    }
}

/// Colour family used to tint a condition's card. Mapped to concrete
/// colours by the frontend theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Red,
    Purple,
    Orange,
    Blue,
    Green,
    Yellow,
}

/// One entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disease {
    /// Stable identifier, e.g. `"lung-cancer"`.
    pub id: &'static str,
    pub name: &'static str,
    /// One-line summary for cards.
    pub description: &'static str,
    /// Paragraph shown on the detail view.
    pub details: &'static str,
    pub symptoms: &'static [&'static str],
    pub severity: Severity,
    /// Age groups most commonly affected.
    pub common_age: &'static str,
    pub accent: Accent,
}

impl Disease {
    /// Case-insensitive substring match over the name and every symptom.
    ///
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .symptoms
                .iter()
                .any(|s| s.to_lowercase().contains(needle))
    }
}

static CATALOG: [Disease; 6] = [
    Disease {
        id: "pneumonia",
        name: "Pneumonia",
        description: "Infection that inflames air sacs in one or both lungs",
        details: "Pneumonia is an infection that causes inflammation in the air sacs (alveoli) \
                  of the lungs. The air sacs may fill with fluid or pus, causing symptoms like \
                  cough with phlegm, fever, chills, and difficulty breathing. It can range from \
                  mild to life-threatening and affects people of all ages.",
        symptoms: &[
            "Cough with phlegm",
            "Fever",
            "Shortness of breath",
            "Chest pain",
            "Fatigue",
            "Nausea",
        ],
        severity: Severity::ModerateToSevere,
        common_age: "All ages, especially children and seniors",
        accent: Accent::Red,
    },
    Disease {
        id: "lung-cancer",
        name: "Lung Cancer",
        description: "Cancer that begins in the lungs",
        details: "Lung cancer is a type of cancer that begins in the lungs. It is the leading \
                  cause of cancer deaths worldwide. There are two main types: non-small cell \
                  lung cancer and small cell lung cancer. Smoking is the primary risk factor, \
                  though non-smokers can also develop lung cancer.",
        symptoms: &[
            "Persistent cough",
            "Coughing up blood",
            "Shortness of breath",
            "Chest pain",
            "Weight loss",
            "Fatigue",
        ],
        severity: Severity::Severe,
        common_age: "55 and older",
        accent: Accent::Purple,
    },
    Disease {
        id: "tuberculosis",
        name: "Tuberculosis",
        description: "Bacterial infection affecting the lungs",
        details: "Tuberculosis (TB) is a potentially serious infectious disease that mainly \
                  affects the lungs. It spreads through the air when people with active TB \
                  cough, sneeze, or spit.",
        symptoms: &[
            "Persistent cough",
            "Night sweats",
            "Weight loss",
            "Fatigue",
            "Chest pain",
        ],
        severity: Severity::ModerateToSevere,
        common_age: "All ages",
        accent: Accent::Orange,
    },
    Disease {
        id: "covid-19",
        name: "COVID-19",
        description: "Respiratory illness caused by SARS-CoV-2 virus",
        details: "COVID-19 is a respiratory illness caused by the SARS-CoV-2 virus. It can \
                  range from mild symptoms to severe illness. Some people may experience \
                  long-term effects. Vaccination and preventive measures help reduce \
                  transmission and severity.",
        symptoms: &[
            "Cough",
            "Fever",
            "Shortness of breath",
            "Loss of taste/smell",
            "Body aches",
            "Fatigue",
        ],
        severity: Severity::MildToSevere,
        common_age: "All ages, higher risk for seniors",
        accent: Accent::Blue,
    },
    Disease {
        id: "asthma",
        name: "Asthma",
        description: "Chronic respiratory condition with airway inflammation",
        details: "Asthma is a condition in which airways narrow and swell and may produce \
                  extra mucus. This can make breathing difficult and trigger coughing and \
                  wheezing.",
        symptoms: &[
            "Wheezing",
            "Shortness of breath",
            "Chest tightness",
            "Persistent cough",
        ],
        severity: Severity::MildToModerate,
        common_age: "All ages",
        accent: Accent::Green,
    },
    Disease {
        id: "copd",
        name: "COPD/Smoking Damage",
        description: "Chronic lung disease primarily caused by smoking-related damage",
        details: "COPD (Chronic Obstructive Pulmonary Disease) and smoking-related lung damage \
                  represent a group of progressive lung diseases including emphysema and \
                  chronic bronchitis. This condition is primarily caused by long-term smoking \
                  and exposure to harmful particles that damage the lungs and airways, making \
                  breathing increasingly difficult over time.",
        symptoms: &[
            "Chronic cough",
            "Shortness of breath",
            "Wheezing",
            "Chest tightness",
            "Fatigue",
            "Frequent infections",
        ],
        severity: Severity::ModerateToSevere,
        common_age: "40 and older, especially smokers",
        accent: Accent::Yellow,
    },
];

/// The full catalog in declaration order.
pub fn all() -> &'static [Disease] {
    &CATALOG
}

/// Look up a condition by its identifier.
pub fn find(id: &str) -> Option<&'static Disease> {
    CATALOG.iter().find(|d| d.id == id)
}

/// The first `n` entries, used for the home page highlights.
pub fn featured(n: usize) -> &'static [Disease] {
    &CATALOG[..n.min(CATALOG.len())]
}

/// Entries whose name or any symptom contains `query`, ignoring case.
///
/// An empty query returns the whole catalog. The query is not trimmed, so
/// a lone space only matches names or symptoms that contain one.
pub fn filter(query: &str) -> Vec<&'static Disease> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|d| d.matches_lowercase(&needle))
        .collect()
}

/// Which catalog entries one user-entered symptom points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomMatch {
    /// The symptom as the user typed it.
    pub symptom: String,
    /// Identifiers of matching conditions, in catalog order.
    pub disease_ids: Vec<&'static str>,
}

/// Match free-text symptoms against the catalog.
///
/// A symptom matches a condition when it contains, or is contained by, one
/// of the condition's symptoms (case-insensitive). Symptoms matching nothing
/// are left out of the result.
pub fn match_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Vec<SymptomMatch> {
    symptoms
        .iter()
        .filter_map(|raw| {
            let symptom = raw.as_ref();
            let needle = symptom.to_lowercase();
            if needle.is_empty() {
                return None;
            }
            let disease_ids: Vec<&'static str> = CATALOG
                .iter()
                .filter(|d| {
                    d.symptoms.iter().any(|s| {
                        let s = s.to_lowercase();
                        s.contains(&needle) || needle.contains(&s)
                    })
                })
                .map(|d| d.id)
                .collect();
            (!disease_ids.is_empty()).then(|| SymptomMatch {
                symptom: symptom.to_owned(),
                disease_ids,
            })
        })
        .collect()
}

/// Conditions matched by any of `symptoms`, in catalog order, each listed once.
pub fn filter_by_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Vec<&'static Disease> {
    let matches = match_symptoms(symptoms);
    CATALOG
        .iter()
        .filter(|d| matches.iter().any(|m| m.disease_ids.contains(&d.id)))
        .collect()
}

/// Split comma-separated free text into trimmed, non-empty symptom terms.
pub fn split_symptoms(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
