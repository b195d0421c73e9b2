//! Case-level enumerations shared by the export projection and the
//! statistics vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! display_from_as_str {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}
display_from_as_str!(Sex);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YesNoUnknown {
    Yes,
    No,
    Unknown,
}

impl YesNoUnknown {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNoUnknown::Yes => "Yes",
            YesNoUnknown::No => "No",
            YesNoUnknown::Unknown => "Unknown",
        }
    }
}
display_from_as_str!(YesNoUnknown);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disease {
    Cholera,
    Csm,
    Dengue,
    Evd,
    Lassa,
    Measles,
    Monkeypox,
    Plague,
    YellowFever,
    Other,
    Undefined,
}

impl Disease {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::Cholera => "Cholera",
            Disease::Csm => "CSM (Meningitis)",
            Disease::Dengue => "Dengue Fever",
            Disease::Evd => "Ebola Virus Disease",
            Disease::Lassa => "Lassa Fever",
            Disease::Measles => "Measles",
            Disease::Monkeypox => "Monkeypox",
            Disease::Plague => "Plague",
            Disease::YellowFever => "Yellow Fever",
            Disease::Other => "Other Epidemic Disease",
            Disease::Undefined => "Not Yet Defined",
        }
    }
}
display_from_as_str!(Disease);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseClassification {
    NotClassified,
    Suspect,
    Probable,
    Confirmed,
    NoCase,
}

impl CaseClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseClassification::NotClassified => "Not yet classified",
            CaseClassification::Suspect => "Suspect case",
            CaseClassification::Probable => "Probable case",
            CaseClassification::Confirmed => "Confirmed case",
            CaseClassification::NoCase => "Not a case",
        }
    }
}
display_from_as_str!(CaseClassification);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestigationStatus {
    Pending,
    Done,
    Discarded,
}

impl InvestigationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestigationStatus::Pending => "Investigation pending",
            InvestigationStatus::Done => "Investigation done",
            InvestigationStatus::Discarded => "Investigation discarded",
        }
    }
}
display_from_as_str!(InvestigationStatus);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseOutcome {
    NoOutcome,
    Deceased,
    Recovered,
    Unknown,
}

impl CaseOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseOutcome::NoOutcome => "No outcome yet",
            CaseOutcome::Deceased => "Deceased",
            CaseOutcome::Recovered => "Recovered",
            CaseOutcome::Unknown => "Unknown",
        }
    }
}
display_from_as_str!(CaseOutcome);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PresentCondition {
    Alive,
    Dead,
    Buried,
}

impl PresentCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentCondition::Alive => "Alive",
            PresentCondition::Dead => "Dead",
            PresentCondition::Buried => "Buried",
        }
    }
}
display_from_as_str!(PresentCondition);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vaccination {
    Vaccinated,
    Unvaccinated,
    Unknown,
}

impl Vaccination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vaccination::Vaccinated => "Vaccinated",
            Vaccination::Unvaccinated => "Unvaccinated",
            Vaccination::Unknown => "Unknown",
        }
    }
}
display_from_as_str!(Vaccination);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaccinationInfoSource {
    VaccinationCard,
    OralCommunication,
    Unknown,
}

impl VaccinationInfoSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VaccinationInfoSource::VaccinationCard => "Vaccination card",
            VaccinationInfoSource::OralCommunication => "Oral communication",
            VaccinationInfoSource::Unknown => "Unknown",
        }
    }
}
display_from_as_str!(VaccinationInfoSource);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathogenTestResult {
    Positive,
    Negative,
    Pending,
    Indeterminate,
}

impl PathogenTestResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathogenTestResult::Positive => "Positive",
            PathogenTestResult::Negative => "Negative",
            PathogenTestResult::Pending => "Pending",
            PathogenTestResult::Indeterminate => "Indeterminate",
        }
    }
}
display_from_as_str!(PathogenTestResult);

/// Unit of an approximate age value. Ages below one year are usually
/// captured in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApproximateAgeType {
    Years,
    Months,
}

impl ApproximateAgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApproximateAgeType::Years => "Years",
            ApproximateAgeType::Months => "Months",
        }
    }
}
display_from_as_str!(ApproximateAgeType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BurialConductor {
    FamilyCommunity,
    OutbreakTeam,
}

impl BurialConductor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BurialConductor::FamilyCommunity => "Family/community",
            BurialConductor::OutbreakTeam => "Outbreak burial team",
        }
    }
}
display_from_as_str!(BurialConductor);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccupationType {
    Farmer,
    Butcher,
    HunterMeatTrader,
    Miner,
    ReligiousLeader,
    Housewife,
    PupilStudent,
    Child,
    BusinessmanWoman,
    Transporter,
    HealthcareWorker,
    TraditionalSpiritualHealer,
    Other,
}

impl OccupationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OccupationType::Farmer => "Farmer",
            OccupationType::Butcher => "Butcher",
            OccupationType::HunterMeatTrader => "Hunter or meat trader",
            OccupationType::Miner => "Miner",
            OccupationType::ReligiousLeader => "Religious leader",
            OccupationType::Housewife => "Housewife",
            OccupationType::PupilStudent => "Pupil or student",
            OccupationType::Child => "Child",
            OccupationType::BusinessmanWoman => "Businessman/woman",
            OccupationType::Transporter => "Transporter",
            OccupationType::HealthcareWorker => "Healthcare worker",
            OccupationType::TraditionalSpiritualHealer => "Traditional or spiritual healer",
            OccupationType::Other => "Other",
        }
    }
}
display_from_as_str!(OccupationType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationType {
    None,
    Primary,
    Secondary,
    Tertiary,
    Other,
}

impl EducationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationType::None => "None",
            EducationType::Primary => "Primary",
            EducationType::Secondary => "Secondary",
            EducationType::Tertiary => "Tertiary",
            EducationType::Other => "Other",
        }
    }
}
display_from_as_str!(EducationType);

/// Minimal identity projection of a case: enough to reference it from
/// other records without carrying the full export row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRef {
    pub uuid: String,
    pub caption: String,
}

impl CaseRef {
    pub fn new(uuid: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            caption: caption.into(),
        }
    }
}

impl fmt::Display for CaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.caption, self.uuid)
    }
}
