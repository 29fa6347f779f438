use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Sport,
    MultiPitch,
    Boulder,
    Speed,
    Trad,
    Ice,
    DeepWaterSolo,
    FreeSolo,
}

impl Discipline {
    /// Display order of the "most difficult" block.
    pub const ALL: [Discipline; 8] = [
        Discipline::Sport,
        Discipline::MultiPitch,
        Discipline::Boulder,
        Discipline::Speed,
        Discipline::Trad,
        Discipline::Ice,
        Discipline::DeepWaterSolo,
        Discipline::FreeSolo,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SPORT_CLIMBING" => Some(Discipline::Sport),
            "MULTI_PITCH" => Some(Discipline::MultiPitch),
            "BOULDER" => Some(Discipline::Boulder),
            "SPEED_CLIMBING" => Some(Discipline::Speed),
            "TRAD_CLIMBING" => Some(Discipline::Trad),
            "ICE_CLIMBING" => Some(Discipline::Ice),
            "DEEP_WATER_SOLO" => Some(Discipline::DeepWaterSolo),
            "FREE_SOLO" => Some(Discipline::FreeSolo),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Discipline::Sport => "Sport climbing [S]",
            Discipline::MultiPitch => "Multi-pitch climbing [MP]",
            Discipline::Boulder => "Bouldering [B]",
            Discipline::Speed => "Speed climbing [SP]",
            Discipline::Trad => "Trad climbing [T]",
            Discipline::Ice => "Ice climbing [I]",
            Discipline::DeepWaterSolo => "Deep-water solo [DWS]",
            Discipline::FreeSolo => "Free solo [FS]",
        }
    }

    pub fn is_bouldering(self) -> bool {
        matches!(self, Discipline::Boulder)
    }

    /// Styles counted as a clean ascent for the "most difficult" block.
    pub fn clean_styles(self) -> &'static [Style] {
        match self {
            Discipline::Boulder => &[Style::BoulderFlash, Style::Top, Style::BoulderRepetition],
            _ => &[Style::Onsight, Style::Flash, Style::Redpoint, Style::Repetition],
        }
    }

    /// Styles reported in parentheses when harder than the clean best.
    pub fn dirty_styles(self) -> &'static [Style] {
        match self {
            Discipline::Boulder | Discipline::Speed => &[],
            Discipline::DeepWaterSolo | Discipline::FreeSolo => &[],
            _ => &[Style::AllFree, Style::Hangdogging, Style::Aid],
        }
    }

    /// Grading systems tried in order when a route has no explicit override.
    pub fn preferred_systems(self) -> &'static [GradingSystem] {
        match self {
            Discipline::Boulder => &[GradingSystem::Fontainebleau, GradingSystem::Hueco],
            Discipline::Ice => &[GradingSystem::WaterIce],
            _ => &[GradingSystem::French, GradingSystem::Uiaa, GradingSystem::Yds],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    Onsight,
    Flash,
    Redpoint,
    AllFree,
    Hangdogging,
    ThreeQuarters,
    Half,
    Quarter,
    Aid,
    Repetition,
    BoulderFlash,
    Top,
    Project,
    BoulderRepetition,
}

impl Style {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Style::Onsight),
            2 => Some(Style::Flash),
            3 => Some(Style::Redpoint),
            4 => Some(Style::AllFree),
            5 => Some(Style::Hangdogging),
            6 => Some(Style::ThreeQuarters),
            7 => Some(Style::Half),
            8 => Some(Style::Quarter),
            9 => Some(Style::Aid),
            10 => Some(Style::Repetition),
            100 => Some(Style::BoulderFlash),
            101 => Some(Style::Top),
            102 => Some(Style::Project),
            103 => Some(Style::BoulderRepetition),
            _ => None,
        }
    }

    pub fn is_bouldering(self) -> bool {
        matches!(
            self,
            Style::BoulderFlash | Style::Top | Style::Project | Style::BoulderRepetition
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Onsight => "🟢 Onsight",
            Style::Flash | Style::BoulderFlash => "🟢 Flash",
            Style::Redpoint => "🟢 Redpoint",
            Style::AllFree => "🟡 a.f",
            Style::Hangdogging => "🟡 Hangdogging",
            Style::ThreeQuarters => "🔴 3/4",
            Style::Half => "🔴 1/2",
            Style::Quarter => "🔴 1/4",
            Style::Aid => "🟡 Aid",
            Style::Repetition | Style::BoulderRepetition => "🟢 Repetition",
            Style::Top => "🟢 Top",
            Style::Project => "🔴 Project",
        }
    }

    /// Share of the route's height actually climbed.
    pub fn height_coefficient(self) -> f64 {
        match self {
            Style::ThreeQuarters => 0.75,
            Style::Half => 0.5,
            Style::Quarter => 0.25,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Lead,
    Toprope,
    Following,
    AlternateLeads,
    Boulder,
    StandardSpeed,
    CustomSpeed,
    NoRope,
}

impl Variant {
    /// Resolves the discipline-specific variant code (`top_rope` for roped
    /// disciplines, `speed_type` for speed). Disciplines without variants
    /// ignore the code.
    pub fn resolve(discipline: Discipline, code: Option<u32>) -> Option<Self> {
        match (discipline, code) {
            (Discipline::Sport | Discipline::Trad | Discipline::Ice, Some(0) | None) => {
                Some(Variant::Lead)
            }
            (Discipline::Sport | Discipline::Trad | Discipline::Ice, Some(1)) => {
                Some(Variant::Toprope)
            }
            (Discipline::MultiPitch, Some(0) | None) => Some(Variant::Lead),
            (Discipline::MultiPitch, Some(1)) => Some(Variant::Following),
            (Discipline::MultiPitch, Some(2)) => Some(Variant::AlternateLeads),
            (Discipline::Boulder, _) => Some(Variant::Boulder),
            (Discipline::Speed, Some(0) | None) => Some(Variant::StandardSpeed),
            (Discipline::Speed, Some(1)) => Some(Variant::CustomSpeed),
            (Discipline::DeepWaterSolo | Discipline::FreeSolo, _) => Some(Variant::NoRope),
            _ => None,
        }
    }

    pub fn label(self, discipline: Discipline) -> &'static str {
        match (discipline, self) {
            (Discipline::Sport, Variant::Toprope) => "[S] Toprope",
            (Discipline::Sport, _) => "[S] Lead",
            (Discipline::MultiPitch, Variant::Following) => "[MP] Following",
            (Discipline::MultiPitch, Variant::AlternateLeads) => "[MP] Alternate leads",
            (Discipline::MultiPitch, _) => "[MP] Leading",
            (Discipline::Boulder, _) => "[B] Boulder",
            (Discipline::Speed, Variant::CustomSpeed) => "[SP] Custom route",
            (Discipline::Speed, _) => "[SP] Standard route",
            (Discipline::Trad, Variant::Toprope) => "[T] Toprope",
            (Discipline::Trad, _) => "[T] Lead",
            (Discipline::Ice, Variant::Toprope) => "[I] Toprope",
            (Discipline::Ice, _) => "[I] Lead",
            (Discipline::DeepWaterSolo, _) => "[DWS] No rope",
            (Discipline::FreeSolo, _) => "[FS] No rope",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradingSystem {
    French,
    Uiaa,
    Yds,
    Fontainebleau,
    Hueco,
    WaterIce,
}

impl GradingSystem {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "FRENCH" | "FR" => Some(GradingSystem::French),
            "UIAA" => Some(GradingSystem::Uiaa),
            "YDS" | "USA" => Some(GradingSystem::Yds),
            "FONT" | "FONTAINEBLEAU" => Some(GradingSystem::Fontainebleau),
            "V" | "HUECO" | "V_SCALE" => Some(GradingSystem::Hueco),
            "WI" | "ICE" => Some(GradingSystem::WaterIce),
            _ => None,
        }
    }
}
