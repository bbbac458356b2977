use crate::input::{blur_numeric_field, route_numeric_events};
use egui::{
    Align2, Color32, EventFilter, FontId, Id, Painter, Pos2, Rect, Response, Sense, Stroke,
    StrokeKind, TextStyle, Ui, Vec2, Widget,
};
use input_core::{InputId, InputStore, SelectionRange};
use numeric_input::{NumericField, NumericInputConfig, Validity};
use std::hash::Hash;

const DEFAULT_WIDTH: f32 = 120.0;

/// Per-field state the host keeps between frames.
#[derive(Debug, Default)]
pub struct NumericInputState {
    pub field: NumericField,
    had_focus: bool,
}

impl NumericInputState {
    pub fn new(config: NumericInputConfig) -> Self {
        Self {
            field: NumericField::new(config),
            had_focus: false,
        }
    }
}

/// A single-line numeric text field backed by an [`InputStore`].
///
/// Typing, pasting and clipboard shortcuts go through the field's guard while
/// it has focus; losing focus rewrites the text with the configured scale.
pub struct NumericInput<'a, S: InputStore + ?Sized> {
    id: Id,
    store: &'a mut S,
    state: &'a mut NumericInputState,
    desired_width: f32,
}

impl<'a, S: InputStore + ?Sized> NumericInput<'a, S> {
    pub fn new(id_salt: impl Hash, store: &'a mut S, state: &'a mut NumericInputState) -> Self {
        Self {
            id: Id::new(id_salt),
            store,
            state,
            desired_width: DEFAULT_WIDTH,
        }
    }

    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = width;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// The store key the widget reads and writes.
    pub fn input_id(&self) -> InputId {
        input_id_for(self.id)
    }
}

pub fn input_id_for(id: Id) -> InputId {
    InputId::from_raw(id.value())
}

impl<S: InputStore + ?Sized> Widget for NumericInput<'_, S> {
    fn ui(self, ui: &mut Ui) -> Response {
        let NumericInput {
            id,
            store,
            state,
            desired_width,
        } = self;
        let input_id = input_id_for(id);
        store.ensure_initial(input_id, String::new());

        let padding = ui.spacing().button_padding;
        let row_height = ui.text_style_height(&TextStyle::Body);
        let size = Vec2::new(desired_width, row_height + 2.0 * padding.y);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let mut response = ui.interact(rect, id, Sense::click());

        if response.clicked() {
            response.request_focus();
        } else if response.clicked_elsewhere() && response.has_focus() {
            response.surrender_focus();
        }

        let focused = response.has_focus();
        if focused {
            ui.memory_mut(|mem| {
                mem.set_focus_lock_filter(
                    id,
                    EventFilter {
                        tab: false,
                        horizontal_arrows: true,
                        vertical_arrows: true,
                        escape: false,
                    },
                )
            });
            if !state.had_focus {
                store.focus(input_id);
            }

            let events = ui.input(|i| i.events.clone());
            let outcome = route_numeric_events(&events, store, input_id, &mut state.field);
            if let Some(text) = outcome.copied {
                ui.ctx().copy_text(text);
            }
            if outcome.text_changed {
                response.mark_changed();
            }
        } else if state.had_focus {
            store.blur(input_id);
            if blur_numeric_field(store, input_id, &mut state.field) {
                log::debug!(target: "gfx.numeric", "normalized {input_id:?} on focus loss");
                response.mark_changed();
            }
        }
        state.had_focus = focused;

        if ui.is_rect_visible(rect)
            && let Some((text, caret, selection)) = store.get_state(input_id)
        {
            let look = FieldLook::from_ui(ui, focused, state.field.validity());
            paint_numeric_field(
                &ui.painter_at(rect),
                rect,
                padding,
                &look,
                text,
                focused.then_some((caret, selection)),
            );
        }

        response
    }
}

struct FieldLook {
    font_id: FontId,
    text_color: Color32,
    fill: Color32,
    stroke: Stroke,
    selection_fill: Color32,
}

impl FieldLook {
    fn from_ui(ui: &Ui, focused: bool, validity: Option<Validity>) -> Self {
        let visuals = ui.visuals();
        let invalid = matches!(
            validity,
            Some(Validity::OutOfRange | Validity::NotANumber)
        );
        let stroke = if invalid {
            Stroke::new(1.0, visuals.error_fg_color)
        } else if focused {
            visuals.selection.stroke
        } else {
            visuals.widgets.inactive.bg_stroke
        };
        Self {
            font_id: TextStyle::Body.resolve(ui.style()),
            text_color: visuals.text_color(),
            fill: visuals.extreme_bg_color,
            stroke,
            selection_fill: visuals.selection.bg_fill,
        }
    }
}

fn paint_numeric_field(
    painter: &Painter,
    rect: Rect,
    padding: Vec2,
    look: &FieldLook,
    text: &str,
    cursor: Option<(usize, Option<SelectionRange>)>,
) {
    painter.rect_filled(rect, 2.0, look.fill);
    painter.rect_stroke(rect, 2.0, look.stroke, StrokeKind::Inside);

    let origin = Pos2::new(rect.left() + padding.x, rect.center().y);
    let prefix_width = |end: usize| {
        let prefix = text.get(..end).unwrap_or(text);
        painter
            .layout_no_wrap(prefix.to_owned(), look.font_id.clone(), look.text_color)
            .size()
            .x
    };
    let top = rect.top() + padding.y;
    let bottom = rect.bottom() - padding.y;

    if let Some((_, Some(sel))) = cursor
        && !sel.is_empty()
    {
        let sel_rect = Rect::from_min_max(
            Pos2::new(origin.x + prefix_width(sel.start), top),
            Pos2::new(origin.x + prefix_width(sel.end), bottom),
        );
        painter.rect_filled(sel_rect, 0.0, look.selection_fill);
    }

    painter.text(
        origin,
        Align2::LEFT_CENTER,
        text,
        look.font_id.clone(),
        look.text_color,
    );

    if let Some((caret, _)) = cursor {
        let x = origin.x + prefix_width(caret);
        painter.line_segment(
            [Pos2::new(x, top), Pos2::new(x, bottom)],
            Stroke::new(1.0, look.text_color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{CentralPanel, Context, Event, Key, Modifiers, RawInput};
    use input_core::InputValueStore;

    const SALT: &str = "price";

    fn raw_input(events: Vec<Event>) -> RawInput {
        RawInput {
            events,
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            ..Default::default()
        }
    }

    fn run_frame(
        ctx: &Context,
        events: Vec<Event>,
        store: &mut InputValueStore,
        state: &mut NumericInputState,
    ) -> Response {
        let mut response = None;
        ctx.run(raw_input(events), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                response = Some(ui.add(NumericInput::new(SALT, &mut *store, &mut *state)));
            });
        });
        response.unwrap()
    }

    fn keystroke(key: Key, text: &str) -> Vec<Event> {
        let key_event = |pressed| Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: Modifiers::NONE,
        };
        vec![key_event(true), Event::Text(text.to_string()), key_event(false)]
    }

    #[test]
    fn unfocused_field_ignores_typing() {
        let ctx = Context::default();
        let mut store = InputValueStore::new();
        let mut state = NumericInputState::new(NumericInputConfig::new());

        run_frame(&ctx, keystroke(Key::Num1, "1"), &mut store, &mut state);

        assert_eq!(store.get(input_id_for(Id::new(SALT))), Some(""));
    }

    #[test]
    fn focused_field_routes_keys_and_normalizes_on_blur() {
        let ctx = Context::default();
        let mut store = InputValueStore::new();
        let mut state =
            NumericInputState::new(NumericInputConfig::new().with_range(0.0, 100.0).with_scale(2));
        let id = Id::new(SALT);
        let input_id = input_id_for(id);

        run_frame(&ctx, Vec::new(), &mut store, &mut state);
        ctx.memory_mut(|mem| mem.request_focus(id));

        let mut events = keystroke(Key::Num4, "4");
        events.extend(keystroke(Key::Period, "."));
        events.extend(keystroke(Key::Num5, "5"));
        events.extend(keystroke(Key::Q, "q"));
        let response = run_frame(&ctx, events, &mut store, &mut state);
        assert!(response.changed());
        assert_eq!(store.get(input_id), Some("4.5"));

        run_frame(&ctx, keystroke(Key::Num9, "9"), &mut store, &mut state);
        run_frame(&ctx, keystroke(Key::Num9, "9"), &mut store, &mut state);
        assert_eq!(store.get(input_id), Some("4.599"));

        ctx.memory_mut(|mem| mem.surrender_focus(id));
        let response = run_frame(&ctx, Vec::new(), &mut store, &mut state);
        assert!(response.changed());
        assert_eq!(store.get(input_id), Some("4.60"));
        assert_eq!(state.field.validity(), Some(Validity::Valid));
    }

    #[test]
    fn out_of_range_keystroke_is_reverted_in_frame() {
        let ctx = Context::default();
        let mut store = InputValueStore::new();
        let id = Id::new(SALT);
        let input_id = input_id_for(id);
        store.ensure_initial(input_id, "100".to_string());
        let mut state =
            NumericInputState::new(NumericInputConfig::new().with_range(0.0, 100.0));

        run_frame(&ctx, Vec::new(), &mut store, &mut state);
        ctx.memory_mut(|mem| mem.request_focus(id));
        run_frame(&ctx, keystroke(Key::Num0, "0"), &mut store, &mut state);

        assert_eq!(store.get(input_id), Some("100"));
    }
}
