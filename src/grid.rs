use itertools::Itertools;

use crate::calendar;
use crate::config::GridConfig;
use crate::primitive::{Primitive, ShapePrimitive, TextPrimitive};

/// Layout pass over one month: turns a [`GridConfig`] into the ordered
/// list of primitives a host inserts as native elements.
///
/// Day labels come first, one per column left to right, then a
/// shape/text pair for every populated cell in row-major order. Cells
/// before the first of the month and after its last day stay empty.
/// Days that fall outside `rows * columns` cells are dropped.
pub struct MonthGrid<'a> {
    config: &'a GridConfig,
    num_days: u32,
    offset: u32,
}

impl<'a> MonthGrid<'a> {
    const DAY_LABELS: &'static [&'static str] =
        &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    /// Vertical distance between the label band and row 0.
    const LABEL_RAISE: f64 = 15.0;
    const TEXT_INSET_TOP: f64 = 2.0;
    const TEXT_INSET_LEFT: f64 = 3.0;

    pub fn new(config: &'a GridConfig) -> Self {
        let month = config.chrono_month();
        let num_days = calendar::days_of_month(&month, config.year);
        let offset =
            calendar::first_weekday_of_month(&month, config.year).num_days_from_sunday();

        MonthGrid {
            config,
            num_days,
            offset,
        }
    }

    /// Overall width of the emitted grid.
    pub fn width(&self) -> f64 {
        f64::from(self.config.columns) * (self.config.cell_width + self.config.spacing)
            - self.config.spacing
    }

    /// Overall height of the emitted grid, label band included.
    pub fn height(&self) -> f64 {
        f64::from(self.config.rows) * (self.config.cell_height + self.config.spacing)
            - self.config.spacing
            + Self::LABEL_RAISE
    }

    pub fn primitives(&self) -> Vec<Primitive> {
        let populated = self
            .num_days
            .min((self.config.rows * self.config.columns).saturating_sub(self.offset));
        let mut elements =
            Vec::with_capacity((self.config.columns + 2 * populated) as usize);

        self.push_day_labels(&mut elements);
        self.push_date_cells(&mut elements);

        elements
    }

    fn push_day_labels(&self, elements: &mut Vec<Primitive>) {
        let config = self.config;

        for column in 0..config.columns {
            let weekday = column % 7;
            let is_weekend = weekday == 0 || weekday == 6;
            let left = f64::from(column) * (config.cell_width + config.spacing);

            elements.push(Primitive::Text(TextPrimitive {
                width: config.cell_width - Self::TEXT_INSET_LEFT,
                height: config.cell_height,
                top: -Self::LABEL_RAISE,
                left: left + Self::TEXT_INSET_LEFT + config.spacing,
                text: Self::DAY_LABELS[weekday as usize].to_owned(),
                color: if is_weekend {
                    config.weekend_day_label_color
                } else {
                    config.text_color
                },
                decoration: config.decoration,
                font_style: config.font_style,
                font_weight: config.font_weight,
                font_size: config.day_font_size,
            }));
        }
    }

    fn push_date_cells(&self, elements: &mut Vec<Primitive>) {
        let config = self.config;
        let mut date = 1u32;

        for (row, column) in (0..config.rows).cartesian_product(0..config.columns) {
            if row * config.columns + column < self.offset || date > self.num_days {
                continue;
            }

            let day_of_week = (self.offset + date - 1) % 7;
            let is_weekend = day_of_week == 0 || day_of_week == 6;
            let top = f64::from(row) * (config.cell_height + config.spacing);
            let left = f64::from(column) * (config.cell_width + config.spacing);

            elements.push(Primitive::Shape(ShapePrimitive::new(
                config.cell_width,
                config.cell_height,
                top,
                left,
                if is_weekend {
                    config.weekend_shape_color
                } else {
                    config.shape_color
                },
            )));

            elements.push(Primitive::Text(TextPrimitive {
                width: config.cell_width - Self::TEXT_INSET_LEFT,
                height: config.cell_height,
                top: top + Self::TEXT_INSET_TOP,
                left: left + Self::TEXT_INSET_LEFT,
                text: date.to_string(),
                color: if is_weekend {
                    config.weekend_text_color
                } else {
                    config.text_color
                },
                decoration: config.decoration,
                font_style: config.font_style,
                font_weight: config.font_weight,
                font_size: config.font_size,
            }));

            date += 1;
        }
    }
}

/// Generates the primitive list for `config`.
///
/// Pure: no I/O, no retained state, structurally identical output for
/// identical input. Inputs are assumed to have passed
/// [`GridConfig::validate`](crate::config::GridConfig::validate).
pub fn generate(config: &GridConfig) -> Vec<Primitive> {
    MonthGrid::new(config).primitives()
}
