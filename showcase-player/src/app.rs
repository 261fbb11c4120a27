//! iced application hosting a single carousel.

use iced::widget::scrollable::{AbsoluteOffset, Direction, Scrollbar};
use iced::widget::{Space, button, center, column, container, mouse_area, row, scrollable, text};
use iced::{
    Background, Element, Event, Length, Padding, Rectangle, Size, Subscription, Task, Theme, event,
    touch, window,
};
use showcase_config::{CatalogItem, ShowcaseConfig};
use showcase_core::{
    controller::CarouselController,
    input::CarouselEvent,
    items::ItemSet,
    layout::CardMetrics,
    surface::{ButtonState, SurfaceElement},
};

use crate::{surface::IcedSurface, timer::SubscriptionTimer};

/// Card footprint the player renders; margins are applied as padding.
pub const CARD: CardMetrics = CardMetrics::new(240.0, 10.0, 10.0);
const CARD_HEIGHT: f32 = 300.0;

pub type Carousel = CarouselController<CatalogItem, IcedSurface, SubscriptionTimer>;

#[derive(Debug, Clone)]
pub enum Message {
    Carousel(CarouselEvent),
    /// Raw finger event; only touches that start on the track reach the
    /// carousel.
    Touch(touch::Event),
    TrackBounds(Option<Rectangle>),
}

#[derive(Debug)]
pub struct App {
    carousel: Carousel,
    track_id: scrollable::Id,
    track_area: container::Id,
    track_bounds: Option<Rectangle>,
    /// Finger that went down on the track and has not lifted yet.
    track_finger: Option<touch::Finger>,
}

impl App {
    pub fn new(config: &ShowcaseConfig) -> showcase_core::Result<Self> {
        let items: ItemSet<CatalogItem> = config.items.clone().into();
        let surface = IcedSurface::new(CARD, items.len());
        let carousel = CarouselController::new(
            items,
            config.window.width,
            &config.carousel,
            surface,
            SubscriptionTimer::default(),
        )?;

        Ok(Self {
            carousel,
            track_id: scrollable::Id::unique(),
            track_area: container::Id::unique(),
            track_bounds: None,
            track_finger: None,
        })
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let event = match message {
            Message::Carousel(event) => Some(event),
            Message::Touch(touch) => self.route_touch(touch),
            Message::TrackBounds(bounds) => {
                self.track_bounds = bounds;
                None
            }
        };

        let Some(event) = event else {
            return Task::none();
        };
        self.carousel.dispatch(event);

        let scroll = match self.carousel.surface_mut().take_pending_scroll() {
            Some(x) => scrollable::scroll_to(self.track_id.clone(), AbsoluteOffset { x, y: 0.0 }),
            None => Task::none(),
        };
        // The track width follows the display count.
        if matches!(event, CarouselEvent::Resized { .. }) {
            Task::batch([scroll, self.measure_track()])
        } else {
            scroll
        }
    }

    /// Query where the track landed on screen.
    pub fn measure_track(&self) -> Task<Message> {
        container::visible_bounds(self.track_area.clone()).map(Message::TrackBounds)
    }

    /// Turn a finger event into a swipe step if it belongs to the track. A
    /// touch that starts on the track ends there too, wherever it lifts.
    fn route_touch(&mut self, touch: touch::Event) -> Option<CarouselEvent> {
        match touch {
            touch::Event::FingerPressed { id, position } => {
                let on_track = self.track_bounds.is_some_and(|bounds| bounds.contains(position));
                if !on_track {
                    return None;
                }
                self.track_finger = Some(id);
                Some(CarouselEvent::TouchStart { x: position.x })
            }
            touch::Event::FingerLifted { id, position }
            | touch::Event::FingerLost { id, position } => {
                if self.track_finger != Some(id) {
                    return None;
                }
                self.track_finger = None;
                Some(CarouselEvent::TouchEnd { x: position.x })
            }
            touch::Event::FingerMoved { .. } => None,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.carousel.timer().subscription().map(Message::Carousel),
            event::listen_with(route_event),
        ])
    }

    pub fn view(&self) -> Element<'_, Message> {
        let surface = self.carousel.surface();
        let display_count = self.carousel.index().display_count();

        let cards = row(self.carousel.items().iter().map(product_card));
        let track = scrollable(cards)
            .id(self.track_id.clone())
            .direction(Direction::Horizontal(Scrollbar::new().width(0.0).scroller_width(0.0)))
            .width(Length::Fixed(display_count as f32 * surface.card().outer_width()));
        let track = hover_target(
            container(track).id(self.track_area.clone()),
            SurfaceElement::Track,
        );

        let nav = surface.nav();
        let prev = hover_target(
            nav_button("‹", nav.prev, CarouselEvent::PrevActivated),
            SurfaceElement::PrevButton,
        );
        let next = hover_target(
            nav_button("›", nav.next, CarouselEvent::NextActivated),
            SurfaceElement::NextButton,
        );

        let dots = row(surface.dots().iter().map(|dot| {
            let style = if dot.active { button::primary } else { button::secondary };
            button(Space::new(10.0, 10.0))
                .padding(0.0)
                .style(style)
                .on_press(Message::Carousel(dot.action()))
                .into()
        }))
        .spacing(8.0);
        let dots = hover_target(dots, SurfaceElement::DotsContainer);

        let content = column![
            row![prev, track, next].spacing(12.0).align_y(iced::Alignment::Center),
            dots,
        ]
        .spacing(20.0)
        .align_x(iced::Alignment::Center);

        center(content).into()
    }

    pub fn theme(&self) -> Theme {
        Theme::TokyoNight
    }
}

/// Wrap `content` so hovering it suspends autoplay.
fn hover_target<'a>(
    content: impl Into<Element<'a, Message>>,
    element: SurfaceElement,
) -> Element<'a, Message> {
    mouse_area(content)
        .on_enter(Message::Carousel(CarouselEvent::PointerEnter(element)))
        .on_exit(Message::Carousel(CarouselEvent::PointerLeave(element)))
        .into()
}

fn nav_button(
    label: &'static str,
    state: ButtonState,
    event: CarouselEvent,
) -> Element<'static, Message> {
    let opacity = state.opacity;
    button(text(label).size(28.0))
        .padding([4.0, 14.0])
        .on_press_maybe(state.enabled.then_some(Message::Carousel(event)))
        .style(move |theme: &Theme, status| {
            let mut style = button::primary(theme, status);
            style.background = style.background.map(|background| match background {
                Background::Color(color) => Background::Color(color.scale_alpha(opacity)),
                other => other,
            });
            style.text_color = style.text_color.scale_alpha(opacity);
            style
        })
        .into()
}

fn product_card(item: &CatalogItem) -> Element<'_, Message> {
    let mut body =
        column![text(&item.title).size(20.0), text(&item.caption).size(14.0)].spacing(8.0);
    if let Some(price) = &item.price {
        body = body.push(Space::with_height(Length::Fill));
        body = body.push(text(price).size(18.0));
    }

    container(
        container(body)
            .padding(16.0)
            .width(Length::Fixed(CARD.width))
            .height(Length::Fixed(CARD_HEIGHT))
            .style(container::rounded_box),
    )
    .padding(Padding {
        top: 0.0,
        bottom: 0.0,
        left: CARD.margin_left,
        right: CARD.margin_right,
    })
    .into()
}

fn route_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::Carousel(
            CarouselEvent::Resized { viewport_width: size.width },
        )),
        Event::Touch(
            touch @ (touch::Event::FingerPressed { .. }
            | touch::Event::FingerLifted { .. }
            | touch::Event::FingerLost { .. }),
        ) => Some(Message::Touch(touch)),
        _ => None,
    }
}

/// Run the player until the window closes.
pub fn run(config: ShowcaseConfig) -> anyhow::Result<()> {
    let app = App::new(&config)?;
    let window_size = Size::new(config.window.width, config.window.height);

    iced::application("Showcase", App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(window_size)
        .run_with(move || {
            let measure = app.measure_track();
            (app, measure)
        })?;

    Ok(())
}
