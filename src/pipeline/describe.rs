use std::fmt::Write;

use crate::error::FormatError;
use crate::pipeline::grades;
use crate::types::backup::{LocationRecord, RouteRecord};
use crate::types::climbing::{Discipline, GradingSystem, Style, Variant};

/// A backup route with its codes resolved against the closed tables.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedRoute<'a> {
    pub record: &'a RouteRecord,
    pub discipline: Discipline,
    pub style: Style,
    pub variant: Variant,
}

pub fn classify(route: &RouteRecord) -> Result<ClassifiedRoute<'_>, FormatError> {
    let discipline =
        Discipline::from_code(&route.route_type).ok_or_else(|| FormatError::UnknownDiscipline {
            route_id: route.route_id,
            code: route.route_type.clone(),
        })?;
    let style = Style::from_code(route.style_id).ok_or(FormatError::UnknownStyle {
        route_id: route.route_id,
        code: route.style_id,
    })?;
    if style.is_bouldering() != discipline.is_bouldering() {
        return Err(FormatError::UnsupportedStyle {
            route_id: route.route_id,
            discipline,
            style,
        });
    }

    let variant_code = match discipline {
        Discipline::Speed => route.speed_type,
        _ => route.top_rope,
    };
    let variant =
        Variant::resolve(discipline, variant_code).ok_or(FormatError::UnknownVariant {
            route_id: route.route_id,
            discipline,
            code: variant_code,
        })?;

    Ok(ClassifiedRoute {
        record: route,
        discipline,
        style,
        variant,
    })
}

impl ClassifiedRoute<'_> {
    /// Climbed height scaled by how much of the route was completed.
    pub fn effective_height(&self) -> u32 {
        let scaled = (self.record.ascend_height * self.style.height_coefficient()).round();
        if scaled > 0.0 {
            scaled as u32
        } else {
            0
        }
    }

    fn speed_time(&self) -> Result<f64, FormatError> {
        self.record
            .speed_time
            .ok_or(FormatError::MissingSpeedTime {
                route_id: self.record.route_id,
            })
    }

    pub fn grade_label(&self) -> Result<String, FormatError> {
        if self.variant == Variant::StandardSpeed {
            return Ok(format!("{:.2} s", self.speed_time()?));
        }

        let route_id = self.record.route_id;
        let code = self.record.grade_id;
        let row = grades::lookup(code).ok_or(FormatError::UnknownGrade { route_id, code })?;

        let label = match self.record.grade_system.as_deref() {
            Some(name) => {
                let system = GradingSystem::from_name(name).ok_or_else(|| {
                    FormatError::UnknownGradingSystem {
                        route_id,
                        name: name.to_string(),
                    }
                })?;
                row.label(system).ok_or(FormatError::MissingGradeLabel {
                    route_id,
                    code,
                    system,
                })?
            }
            None => row
                .first_label(self.discipline.preferred_systems())
                .ok_or(FormatError::NoPreferredGradeLabel {
                    route_id,
                    code,
                    discipline: self.discipline,
                })?,
        };
        Ok(label.to_string())
    }

    pub fn style_label(&self) -> Result<String, FormatError> {
        match self.discipline {
            Discipline::Speed => Ok(format!("⏱️ {:.2} s", self.speed_time()?)),
            _ => Ok(self.style.label().to_string()),
        }
    }

    pub fn type_label(&self) -> &'static str {
        self.variant.label(self.discipline)
    }
}

pub fn title(location: &LocationRecord) -> String {
    format!(
        "🧗 {} climbing / {}",
        if location.is_outdoor() { "Outdoor" } else { "Indoor" },
        location.location_name
    )
}

/// Effective height of every route, in ascend order.
pub fn bump_heights(routes: &[RouteRecord]) -> Result<Vec<f64>, FormatError> {
    routes
        .iter()
        .map(|route| classify(route).map(|route| f64::from(route.effective_height())))
        .collect()
}

/// Builds the activity description for a session's ascend-ordered routes.
pub fn describe(comment: &str, routes: &[RouteRecord]) -> Result<String, FormatError> {
    if routes.is_empty() {
        return Ok(comment.to_string());
    }

    let routes = routes
        .iter()
        .map(classify)
        .collect::<Result<Vec<_>, _>>()?;

    let mut description = format!("Total ascents: {:02}\n", routes.len());

    let climbed_height: u64 = routes
        .iter()
        .map(|route| u64::from(route.effective_height()))
        .sum();
    if climbed_height > 0 {
        let _ = writeln!(description, "Climbed height: {} m", climbed_height);
    }

    description.push_str("Most difficult: \n");
    for discipline in Discipline::ALL {
        if let Some(line) = best_ascent_line(discipline, &routes)? {
            description.push_str(&line);
        }
    }
    description.push('\n');

    if !comment.is_empty() {
        let _ = write!(description, "{}\n\n", comment);
    }

    for (index, route) in routes.iter().enumerate() {
        let _ = write!(description, "{:02}", index + 1);
        if let Some(name) = route.record.route_name.as_deref().filter(|name| !name.is_empty()) {
            let _ = write!(description, " | {}", name);
        }
        let height = route.effective_height();
        if height > 0 {
            let _ = write!(description, " | {} m", height);
        }
        description.push('\n');

        let _ = writeln!(
            description,
            "{} | {} | {}",
            route.grade_label()?,
            route.style_label()?,
            route.type_label()
        );

        if let Some(comment) = route.record.comment.as_deref().filter(|c| !c.is_empty()) {
            let _ = writeln!(description, "{}", comment);
        }
        description.push('\n');
    }

    Ok(description.trim().to_string())
}

fn best_ascent_line(
    discipline: Discipline,
    routes: &[ClassifiedRoute<'_>],
) -> Result<Option<String>, FormatError> {
    let of_discipline = move || routes.iter().filter(move |route| route.discipline == discipline);

    if discipline == Discipline::Speed {
        let fastest = of_discipline()
            .filter_map(|route| route.record.speed_time.map(|time| (time, route)))
            .min_by(|(a, _), (b, _)| a.total_cmp(b));
        return match fastest {
            Some((_, route)) => Ok(Some(format!(
                " - {}: {}\n",
                discipline.label(),
                route.grade_label()?
            ))),
            None => Ok(None),
        };
    }

    let hardest = |styles: &[Style]| {
        of_discipline()
            .filter(|route| styles.contains(&route.style))
            .max_by_key(|route| route.record.grade_id)
    };

    let clean = hardest(discipline.clean_styles());
    let dirty = hardest(discipline.dirty_styles()).filter(|dirty| {
        clean.map_or(true, |clean| dirty.record.grade_id > clean.record.grade_id)
    });

    let line = match (clean, dirty) {
        (None, None) => return Ok(None),
        (Some(clean), None) => format!(" - {}: {}\n", discipline.label(), clean.grade_label()?),
        (Some(clean), Some(dirty)) => format!(
            " - {}: {} ({})\n",
            discipline.label(),
            clean.grade_label()?,
            dirty.grade_label()?
        ),
        (None, Some(dirty)) => format!(" - {}: ({})\n", discipline.label(), dirty.grade_label()?),
    };
    Ok(Some(line))
}
