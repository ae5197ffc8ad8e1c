use crate::config::MatrixConfig;
use crate::domain::model::{Color, Indicator};

/// Ukrainian trait labels for sectors 1-9.
pub fn sector_label(sector: u8) -> &'static str {
    match sector {
        1 => "ХАРАКТЕР",
        2 => "ЕНЕРГІЯ",
        3 => "ІНТЕРЕС",
        4 => "ЗДОРОВ’Я",
        5 => "ЛОГІКА",
        6 => "ПРАЦЯ",
        7 => "УДАЧА",
        8 => "ОБОВ’ЯЗОК",
        _ => "ПАМ’ЯТЬ",
    }
}

pub fn indicator_label(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Temperament => "ТЕМПЕРАМЕНТ",
        Indicator::Family => "СІМ'Я",
        Indicator::Household => "ПОБУТ",
        Indicator::Habits => "ЗВИЧКИ",
        Indicator::Goal => "ЦІЛЬ",
    }
}

/// Visual grid placement, column-major: column 0 holds sectors 1-3.
const GRID_ORDER: [[u8; 3]; 3] = [[1, 4, 7], [2, 5, 8], [3, 6, 9]];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }
}

/// Where a text line gets its content from at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    /// Fixed template text (titles, sector labels, the contact handle).
    Literal(String),
    /// Looked up from the profile / display name when rendering.
    Value(ValueBinding),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueBinding {
    Name,
    BirthDate,
    LifePath,
    SectorCount(u8),
    Indicator(Indicator),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub rect: Rect,
    pub font_px: f32,
    pub content: TextContent,
}

/// One rounded-rectangle card. Text color is fixed at template build time by
/// the fill's luminance, never per render.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Color,
    pub text: Color,
    pub lines: Vec<TextSpec>,
}

/// The static card template: 4 header cards, the 3×3 sector grid, 3 side
/// indicator cards and the bottom accent/indicator/contact row. Built once
/// per renderer and reused for every render.
#[derive(Debug, Clone)]
pub struct LayoutModel {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub regions: Vec<Region>,
}

impl LayoutModel {
    pub fn build(config: &MatrixConfig) -> Self {
        let width = config.canvas.width;
        let height = config.canvas.height;
        let palette = &config.palette;

        // All linear sizes come from the 1080-wide mock and scale with the
        // configured width.
        let s = width as f32 / 1080.0;
        let w = width as f32;
        let margin = 46.0 * s;
        let gap = 24.0 * s;
        let header_w = (w - 2.0 * margin - 3.0 * gap) / 4.0;
        let header_h = 120.0 * s;
        let cell = 210.0 * s;
        let header_radius = 22.0 * s;
        let card_radius = 26.0 * s;
        let font_lbl = 34.0 * s;
        let font_val = 40.0 * s;
        let font_head = 36.0 * s;
        let font_foot = 32.0 * s;

        let text_on = |fill: Color| {
            if fill.is_dark() {
                palette.text_light
            } else {
                palette.text_dark
            }
        };

        let mut regions = Vec::with_capacity(19);

        // Row 1: four accent header cards.
        let headers: [(&str, ValueBinding); 4] = [
            ("Ім’я", ValueBinding::Name),
            ("Дата народження", ValueBinding::BirthDate),
            ("ЧИСЛО ДОЛІ", ValueBinding::LifePath),
            (
                indicator_label(Indicator::Temperament),
                ValueBinding::Indicator(Indicator::Temperament),
            ),
        ];
        let y = margin;
        for (i, (title, binding)) in headers.iter().enumerate() {
            let x = margin + i as f32 * (header_w + gap);
            regions.push(Region {
                rect: Rect::new(x, y, header_w, header_h),
                radius: header_radius,
                fill: palette.accent,
                text: text_on(palette.accent),
                lines: vec![
                    TextSpec {
                        rect: Rect::new(x, y + 10.0 * s, header_w, 48.0 * s),
                        font_px: font_head,
                        content: TextContent::Literal(title.to_string()),
                    },
                    TextSpec {
                        rect: Rect::new(x, y + 60.0 * s, header_w, header_h - 68.0 * s),
                        font_px: font_val,
                        content: TextContent::Value(*binding),
                    },
                ],
            });
        }

        // 3×3 muted sector grid.
        let grid_top = y + header_h + gap;
        for (r, row) in GRID_ORDER.iter().enumerate() {
            for (c, &sector) in row.iter().enumerate() {
                let x = margin + c as f32 * (cell + gap);
                let y2 = grid_top + r as f32 * (cell + gap);
                regions.push(Region {
                    rect: Rect::new(x, y2, cell, cell),
                    radius: card_radius,
                    fill: palette.muted,
                    text: text_on(palette.muted),
                    lines: vec![
                        TextSpec {
                            rect: Rect::new(x, y2 + 28.0 * s, cell, 62.0 * s),
                            font_px: font_lbl,
                            content: TextContent::Literal(sector_label(sector).to_string()),
                        },
                        TextSpec {
                            rect: Rect::new(x, y2 + 100.0 * s, cell, cell - 116.0 * s),
                            font_px: font_val,
                            content: TextContent::Value(ValueBinding::SectorCount(sector)),
                        },
                    ],
                });
            }
        }

        // Accent side cards aligned to the grid rows.
        let side_indicators = [Indicator::Goal, Indicator::Family, Indicator::Habits];
        for (i, indicator) in side_indicators.iter().enumerate() {
            let x = margin + 3.0 * (cell + gap);
            let y2 = grid_top + i as f32 * (cell + gap);
            regions.push(Region {
                rect: Rect::new(x, y2, cell, cell),
                radius: card_radius,
                fill: palette.accent,
                text: text_on(palette.accent),
                lines: vec![
                    TextSpec {
                        rect: Rect::new(x, y2 + 28.0 * s, cell, 62.0 * s),
                        font_px: font_lbl,
                        content: TextContent::Literal(indicator_label(*indicator).to_string()),
                    },
                    TextSpec {
                        rect: Rect::new(x, y2 + 100.0 * s, cell, cell - 116.0 * s),
                        font_px: font_val,
                        content: TextContent::Value(ValueBinding::Indicator(*indicator)),
                    },
                ],
            });
        }

        // Bottom row: blank accent card, Household card, wide contact card.
        let bottom_y = grid_top + 3.0 * (cell + gap) + gap;
        regions.push(Region {
            rect: Rect::new(margin, bottom_y, cell, header_h),
            radius: card_radius,
            fill: palette.accent,
            text: text_on(palette.accent),
            lines: Vec::new(),
        });

        let x1 = margin + cell + gap;
        regions.push(Region {
            rect: Rect::new(x1, bottom_y, cell, header_h),
            radius: card_radius,
            fill: palette.accent,
            text: text_on(palette.accent),
            lines: vec![
                TextSpec {
                    rect: Rect::new(x1, bottom_y + 18.0 * s, cell, 42.0 * s),
                    font_px: font_head,
                    content: TextContent::Literal(
                        indicator_label(Indicator::Household).to_string(),
                    ),
                },
                TextSpec {
                    rect: Rect::new(x1, bottom_y + 58.0 * s, cell, header_h - 66.0 * s),
                    font_px: font_val,
                    content: TextContent::Value(ValueBinding::Indicator(Indicator::Household)),
                },
            ],
        });

        let x2 = x1 + cell + gap;
        let wide_w = w - margin - x2;
        regions.push(Region {
            rect: Rect::new(x2, bottom_y, wide_w, header_h),
            radius: card_radius,
            fill: palette.accent,
            text: text_on(palette.accent),
            lines: vec![
                TextSpec {
                    rect: Rect::new(x2, bottom_y + 18.0 * s, wide_w, 42.0 * s),
                    font_px: font_head,
                    content: TextContent::Literal(config.contact.title.clone()),
                },
                TextSpec {
                    rect: Rect::new(x2, bottom_y + 58.0 * s, wide_w, header_h - 66.0 * s),
                    font_px: font_foot,
                    content: TextContent::Literal(config.contact.handle.clone()),
                },
            ],
        });

        Self {
            width,
            height,
            background: palette.background,
            regions,
        }
    }
}
