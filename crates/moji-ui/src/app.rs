use std::sync::Arc;

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Element, Length, Task, Theme};

use moji_core::{
    Config, CopyTarget, FeedbackId, RequestError, RequestToken, SearchApi, SearchController,
    SearchOutcome, SearchRequest, SearchResponse,
};
use moji_platform::Platform;

use crate::copy;
use crate::style;
use crate::widgets;

const SEARCH_INPUT_ID: &str = "search_input";

/// The main application state
pub struct EmojiSearch {
    config: Config,
    api: SearchApi,
    platform: Arc<Platform>,

    // UI state
    query: String,
    controller: SearchController,
}

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Search button pressed or Enter in the query field
    Search,
    SearchFinished(RequestToken, Result<SearchResponse, RequestError>),
    CopyTile(usize),
    CopyFinished(CopyTarget, Result<(), String>),
    FeedbackExpired(FeedbackId),
}

impl EmojiSearch {
    pub fn new(config: Config, platform: Platform, api: SearchApi) -> (Self, Task<Message>) {
        let app = Self {
            config,
            api,
            platform: Arc::new(platform),
            query: String::new(),
            controller: SearchController::new(),
        };

        (app, text_input::focus(text_input::Id::new(SEARCH_INPUT_ID)))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }
            Message::Search => self.perform_search(),
            Message::SearchFinished(token, outcome) => {
                match self.controller.finish_search(token, outcome) {
                    SearchOutcome::Rendered(count) => {
                        tracing::info!(%token, count, "Rendered search results");
                    }
                    SearchOutcome::NoResults => {
                        tracing::info!(%token, "Search returned no results");
                    }
                    SearchOutcome::Failed | SearchOutcome::Stale => {}
                }
                Task::none()
            }
            Message::CopyTile(index) => match self.controller.copy_target(index) {
                Some(target) => copy::copy_task(&self.platform, target),
                None => Task::none(),
            },
            Message::CopyFinished(target, Ok(())) => {
                match self.controller.copy_succeeded(&target) {
                    Some(id) => copy::feedback_task(id, self.config.behavior.feedback_duration()),
                    None => Task::none(),
                }
            }
            Message::CopyFinished(_, Err(e)) => {
                self.controller.copy_failed(&e);
                Task::none()
            }
            Message::FeedbackExpired(id) => {
                self.controller.expire_feedback(id);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let palette = moji_core::get_theme_palette(&self.config.appearance.theme);

        // Enter submits the same message as the button
        let input = text_input("Describe an emoji...", &self.query)
            .id(text_input::Id::new(SEARCH_INPUT_ID))
            .on_input(Message::QueryChanged)
            .on_submit(Message::Search)
            .size(18)
            .padding(12);

        let search_button = button(text("Search").size(16))
            .on_press(Message::Search)
            .padding([10, 16]);

        let search_row = row![input, search_button]
            .spacing(8)
            .align_y(iced::Alignment::Center);

        let mut content = column![search_row].spacing(8).padding(12);

        if self.controller.status().is_visible() {
            content = content.push(widgets::status_line(self.controller.status(), &palette));
        }

        if self.controller.results_visible() {
            let grid = widgets::results_grid(
                &self.controller,
                self.config.appearance.tile_columns as usize,
                &palette,
            );
            content = content.push(scrollable(grid).height(Length::Fill));
        }

        let bg = palette.background;
        let opacity = self.config.appearance.opacity as f32;

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(iced::Color::from_rgba8(
                    bg.0, bg.1, bg.2, opacity,
                ))),
                border: iced::Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    }

    pub fn theme(&self) -> Theme {
        style::theme::moji_theme(&self.config)
    }

    fn perform_search(&mut self) -> Task<Message> {
        let SearchRequest { token, query } = match self.controller.begin_search(&self.query) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Search not started: {}", e);
                return Task::none();
            }
        };

        tracing::info!(%token, query = %query, "Searching");
        let api = self.api.clone();
        Task::perform(
            async move { api.search(&query).await },
            move |outcome| Message::SearchFinished(token, outcome),
        )
    }
}
