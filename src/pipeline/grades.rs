use crate::types::climbing::GradingSystem;

#[derive(Debug, Clone, Copy)]
pub struct GradeRow {
    pub code: u32,
    french: Option<&'static str>,
    uiaa: Option<&'static str>,
    yds: Option<&'static str>,
    font: Option<&'static str>,
    hueco: Option<&'static str>,
    water_ice: Option<&'static str>,
}

impl GradeRow {
    pub fn label(&self, system: GradingSystem) -> Option<&'static str> {
        match system {
            GradingSystem::French => self.french,
            GradingSystem::Uiaa => self.uiaa,
            GradingSystem::Yds => self.yds,
            GradingSystem::Fontainebleau => self.font,
            GradingSystem::Hueco => self.hueco,
            GradingSystem::WaterIce => self.water_ice,
        }
    }

    /// First label available in `systems`, in order.
    pub fn first_label(&self, systems: &[GradingSystem]) -> Option<&'static str> {
        systems.iter().find_map(|system| self.label(*system))
    }
}

const fn roped(code: u32, french: &'static str, uiaa: &'static str, yds: &'static str) -> GradeRow {
    GradeRow {
        code,
        french: Some(french),
        uiaa: Some(uiaa),
        yds: Some(yds),
        font: None,
        hueco: None,
        water_ice: None,
    }
}

const fn boulder(code: u32, font: &'static str, hueco: &'static str) -> GradeRow {
    GradeRow {
        code,
        french: None,
        uiaa: None,
        yds: None,
        font: Some(font),
        hueco: Some(hueco),
        water_ice: None,
    }
}

const fn ice(code: u32, water_ice: &'static str) -> GradeRow {
    GradeRow {
        code,
        french: None,
        uiaa: None,
        yds: None,
        font: None,
        hueco: None,
        water_ice: Some(water_ice),
    }
}

// Sorted by code.
static GRADES: [GradeRow; 70] = [
    roped(150, "1", "I", "5.2"),
    roped(200, "2", "II", "5.3"),
    roped(320, "3", "III", "5.4"),
    roped(375, "4a", "IV", "5.5"),
    roped(400, "4b", "IV+", "5.6"),
    roped(450, "4c", "V-", "5.7"),
    roped(500, "5a", "V", "5.8"),
    roped(600, "5a+", "V+", "5.8"),
    roped(700, "5b", "VI-", "5.9"),
    roped(800, "5b+", "VI-", "5.9"),
    roped(900, "5c", "VI", "5.10a"),
    roped(940, "5c+", "VI+", "5.10a"),
    roped(1000, "6a", "VI+", "5.10a"),
    roped(1100, "6a+", "VII-", "5.10b"),
    roped(1200, "6b", "VII", "5.10c"),
    roped(1300, "6b+", "VII+", "5.10d"),
    roped(1400, "6c", "VII+", "5.11a"),
    roped(1500, "6c+", "VIII-", "5.11b"),
    roped(1600, "7a", "VIII", "5.11d"),
    roped(1700, "7a+", "VIII+", "5.12a"),
    roped(1800, "7b", "VIII+", "5.12b"),
    roped(1900, "7b+", "IX-", "5.12c"),
    roped(2020, "7c", "IX", "5.12d"),
    roped(2100, "7c+", "IX+", "5.13a"),
    roped(2250, "8a", "IX+/X-", "5.13b"),
    roped(2350, "8a+", "X-", "5.13c"),
    roped(2400, "8b", "X", "5.13d"),
    roped(2520, "8b+", "X+", "5.14a"),
    roped(2600, "8c", "XI-", "5.14b"),
    roped(2700, "8c+", "XI", "5.14c"),
    roped(2800, "9a", "XI+", "5.14d"),
    roped(2900, "9a+", "XI+/XII-", "5.15a"),
    roped(3100, "9b", "XII-", "5.15b"),
    roped(3200, "9b+", "XII", "5.15c"),
    roped(3300, "9c", "XII+", "5.15d"),
    boulder(9700, "1", "VB"),
    boulder(9770, "2", "VB"),
    boulder(9800, "3", "VB"),
    boulder(9850, "4a", "V0-"),
    boulder(9975, "4b", "V0-"),
    boulder(10025, "4c", "V0"),
    boulder(10075, "5a", "V0+"),
    boulder(10200, "5b", "V1"),
    boulder(10400, "5c", "V2"),
    boulder(10600, "6a", "V3"),
    boulder(10800, "6a+", "V3"),
    boulder(11000, "6b", "V4"),
    boulder(11200, "6b+", "V4"),
    boulder(11400, "6c", "V5"),
    boulder(11600, "6c+", "V5"),
    boulder(11700, "7a", "V6"),
    boulder(11900, "7a+", "V7"),
    boulder(12100, "7b", "V8"),
    boulder(12300, "7b+", "V8"),
    boulder(12500, "7c", "V9"),
    boulder(12700, "7c+", "V10"),
    boulder(12900, "8a", "V11"),
    boulder(13100, "8a+", "V12"),
    boulder(13300, "8b", "V13"),
    boulder(13500, "8b+", "V14"),
    boulder(13700, "8c", "V15"),
    boulder(13900, "8c+", "V16"),
    boulder(14100, "9a", "V17"),
    ice(20100, "WI1"),
    ice(20200, "WI2"),
    ice(20300, "WI3"),
    ice(20400, "WI4"),
    ice(20500, "WI5"),
    ice(20600, "WI6"),
    ice(20700, "WI7"),
];

pub fn lookup(code: u32) -> Option<&'static GradeRow> {
    GRADES
        .binary_search_by_key(&code, |row| row.code)
        .ok()
        .map(|index| &GRADES[index])
}
