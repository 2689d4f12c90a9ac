use std::ops::Range;

use iced::widget::{column, container, mouse_area, text, tooltip, Column, Row};
use iced::{mouse, Element, Length, Theme};

use moji_core::controller::COPIED_LABEL;
use moji_core::{SearchController, SearchResult, Status, StatusKind, ThemePalette};

use crate::app::Message;

fn color(rgb: (u8, u8, u8)) -> iced::Color {
    iced::Color::from_rgb8(rgb.0, rgb.1, rgb.2)
}

/// Text color for a status kind
pub fn status_color(kind: StatusKind, palette: &ThemePalette) -> (u8, u8, u8) {
    match kind {
        StatusKind::Loading => palette.subtext,
        StatusKind::Error => palette.error,
        StatusKind::Clear => palette.text,
    }
}

/// Render the single-line status message
pub fn status_line<'a>(status: &Status, palette: &ThemePalette) -> Element<'a, Message> {
    text(status.message.clone())
        .size(14)
        .color(color(status_color(status.kind, palette)))
        .into()
}

/// Split `count` tiles into rows of at most `columns`
pub fn grid_rows(count: usize, columns: usize) -> Vec<Range<usize>> {
    let columns = columns.max(1);
    (0..count)
        .step_by(columns)
        .map(|start| start..(start + columns).min(count))
        .collect()
}

/// Render the visible result set as a grid of tiles, in response order
pub fn results_grid<'a>(
    controller: &SearchController,
    columns: usize,
    palette: &ThemePalette,
) -> Element<'a, Message> {
    let results = controller.results();

    let grid: Column<'a, Message> = grid_rows(results.len(), columns).into_iter().fold(
        Column::new().spacing(8),
        |grid, range| {
            let row: Row<'a, Message> = range.fold(Row::new().spacing(8), |row, index| {
                row.push(emoji_tile(
                    index,
                    &results[index],
                    controller.feedback_count(index) > 0,
                    palette,
                ))
            });
            grid.push(row)
        },
    );

    grid.into()
}

/// Render one tile: clickable emoji, score, optional "Copied!" marker
pub fn emoji_tile<'a>(
    index: usize,
    result: &SearchResult,
    copied: bool,
    palette: &ThemePalette,
) -> Element<'a, Message> {
    let emoji = mouse_area(text(result.emoji.clone()).size(40))
        .on_press(Message::CopyTile(index))
        .interaction(mouse::Interaction::Pointer);

    let emoji = tooltip(
        emoji,
        text("Click to copy").size(12),
        tooltip::Position::Top,
    );

    let score = text(result.score_label())
        .size(12)
        .color(color(palette.subtext));

    let mut content = column![emoji, score]
        .spacing(4)
        .align_x(iced::Alignment::Center);

    if copied {
        content = content.push(text(COPIED_LABEL).size(12).color(color(palette.success)));
    }

    let surface = palette.surface;

    container(content)
        .padding(8)
        .center_x(Length::Fixed(96.0))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(color(surface))),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moji_core::get_theme_palette;

    #[test]
    fn test_grid_rows_even() {
        assert_eq!(grid_rows(6, 3), vec![0..3, 3..6]);
    }

    #[test]
    fn test_grid_rows_remainder() {
        assert_eq!(grid_rows(7, 5), vec![0..5, 5..7]);
        assert_eq!(grid_rows(2, 5), vec![0..2]);
    }

    #[test]
    fn test_grid_rows_empty_and_zero_columns() {
        assert!(grid_rows(0, 4).is_empty());
        assert_eq!(grid_rows(2, 0), vec![0..1, 1..2]);
    }

    #[test]
    fn test_status_color() {
        let palette = get_theme_palette("nord");
        assert_eq!(status_color(StatusKind::Error, &palette), palette.error);
        assert_eq!(status_color(StatusKind::Loading, &palette), palette.subtext);
        assert_eq!(status_color(StatusKind::Clear, &palette), palette.text);
    }
}
