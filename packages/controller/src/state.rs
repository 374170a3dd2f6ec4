//! The menu button as an explicit state machine.
//!
//! [`MenuButtonState::transition`] is pure: it takes an event and returns the
//! next state along with the [`Effect`]s needed to bring the page in line with
//! it. Nothing here touches a UI surface.
use strum::Display;

use crate::key::Key;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Popup {
    #[default]
    Closed,
    Open,
}

impl Popup {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Value of an item's `tabindex` attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TabIndex {
    Focusable,
    Excluded,
}

impl TabIndex {
    pub fn value(self) -> i32 {
        match self {
            Self::Focusable => 0,
            Self::Excluded => -1,
        }
    }
}

/// Which item receives tabindex 0.
///
/// With no items every move is a no-op and `index` stays at 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RovingFocus {
    index: usize,
    len: usize,
}

impl RovingFocus {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn next(self) -> Self {
        self.moved_to(|index, len| (index + 1) % len)
    }

    pub fn previous(self) -> Self {
        self.moved_to(|index, len| (index + len - 1) % len)
    }

    pub fn first(self) -> Self {
        self.moved_to(|_, _| 0)
    }

    /// Focus on `index`, or stay put if it's out of range.
    pub fn at(self, index: usize) -> Self {
        if index < self.len {
            Self {
                index,
                len: self.len,
            }
        } else {
            self
        }
    }

    pub fn tab_index(self, item: usize) -> TabIndex {
        if !self.is_empty() && item == self.index {
            TabIndex::Focusable
        } else {
            TabIndex::Excluded
        }
    }

    fn moved_to(self, f: impl FnOnce(usize, usize) -> usize) -> Self {
        if self.is_empty() {
            self
        } else {
            Self {
                index: f(self.index, self.len),
                len: self.len,
            }
        }
    }
}

/// Which item `Enter` on a menu item selects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionTarget {
    /// The item the keyboard event was dispatched to.
    #[default]
    EventItem,
    /// The item holding the roving focus.
    FocusedItem,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Open,
    Close,
    ButtonClick,
    ButtonKey(Key),
    ItemKey { key: Key, index: usize },
    BackgroundMousedown { inside: bool },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Show or hide the menu. Always applied to both the menu's display and
    /// the trigger's `aria-expanded`.
    Popup(Popup),
    TabIndex { item: usize, tab_index: TabIndex },
    FocusItem(usize),
    FocusTrigger,
    Select(usize),
}

/// The effects of one event, in the order they must be applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    effects: Vec<Effect>,
    prevent_default: bool,
}

impl Transition {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }

    pub fn prevent_default(&self) -> bool {
        self.prevent_default
    }

    fn handled(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            prevent_default: true,
        }
    }

    fn unsuppressed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            prevent_default: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MenuButtonState {
    popup: Popup,
    focus: RovingFocus,
    selection: SelectionTarget,
}

impl MenuButtonState {
    /// The initial state for `item_count` items, and the effects that put the
    /// page into it: the menu closed and only the first item focusable.
    pub fn new(item_count: usize, selection: SelectionTarget) -> (Self, Transition) {
        let state = Self {
            popup: Popup::Closed,
            focus: RovingFocus::new(item_count),
            selection,
        };
        let effects = (0..item_count)
            .map(|item| Effect::TabIndex {
                item,
                tab_index: state.focus.tab_index(item),
            })
            .chain([Effect::Popup(Popup::Closed)])
            .collect();

        (state, Transition::unsuppressed(effects))
    }

    pub fn popup(&self) -> Popup {
        self.popup
    }

    pub fn focus(&self) -> RovingFocus {
        self.focus
    }

    pub fn selection(&self) -> SelectionTarget {
        self.selection
    }

    pub fn transition(self, event: MenuEvent) -> (Self, Transition) {
        match event {
            MenuEvent::Open => self.open(),
            MenuEvent::Close => self.close(),
            MenuEvent::ButtonClick => {
                let (state, effects) = match self.popup.toggled() {
                    Popup::Open => self.open(),
                    Popup::Closed => self.close(),
                };
                (state, Transition::handled(effects.into_effects()))
            }
            MenuEvent::ButtonKey(key) if key.opens_popup() => {
                let (state, effects) = self.open();
                (state, Transition::handled(effects.into_effects()))
            }
            MenuEvent::ButtonKey(_) => (self, Transition::ignored()),
            MenuEvent::ItemKey { key, index } => self.item_key(key, index),
            MenuEvent::BackgroundMousedown { inside } => {
                if inside || !self.popup.is_open() {
                    (self, Transition::ignored())
                } else {
                    self.close()
                }
            }
        }
    }

    fn open(self) -> (Self, Transition) {
        let (mut state, mut effects) = self.move_focus(self.focus.first());
        state.popup = Popup::Open;
        effects.insert(0, Effect::Popup(Popup::Open));

        (state, Transition::unsuppressed(effects))
    }

    fn close(self) -> (Self, Transition) {
        let state = Self {
            popup: Popup::Closed,
            ..self
        };

        (state, Transition::unsuppressed(vec![Effect::Popup(Popup::Closed)]))
    }

    fn item_key(self, key: Key, index: usize) -> (Self, Transition) {
        match key {
            Key::ArrowDown => self.navigate(self.focus.at(index).next()),
            Key::ArrowUp => self.navigate(self.focus.at(index).previous()),
            Key::Enter => {
                let selected = match self.selection {
                    SelectionTarget::EventItem => index,
                    SelectionTarget::FocusedItem => self.focus.index(),
                };
                let state = Self {
                    popup: Popup::Closed,
                    ..self
                };
                let mut effects = Vec::with_capacity(3);

                if selected < self.focus.len() {
                    effects.push(Effect::Select(selected));
                }

                effects.extend([Effect::Popup(Popup::Closed), Effect::FocusTrigger]);
                (state, Transition::handled(effects))
            }
            Key::Escape => {
                let state = Self {
                    popup: Popup::Closed,
                    ..self
                };
                let effects = vec![Effect::Popup(Popup::Closed), Effect::FocusTrigger];
                (state, Transition::handled(effects))
            }
            Key::Space | Key::Other(_) => (self, Transition::ignored()),
        }
    }

    fn navigate(self, target: RovingFocus) -> (Self, Transition) {
        let (state, effects) = self.move_focus(target);
        (state, Transition::handled(effects))
    }

    fn move_focus(self, target: RovingFocus) -> (Self, Vec<Effect>) {
        let state = Self {
            focus: target,
            ..self
        };

        if target.is_empty() {
            return (state, Vec::new());
        }

        let previous = self.focus.index();
        let next = target.index();
        let mut effects = Vec::with_capacity(3);

        if previous != next {
            effects.push(Effect::TabIndex {
                item: previous,
                tab_index: TabIndex::Excluded,
            });
        }

        effects.extend([
            Effect::TabIndex {
                item: next,
                tab_index: TabIndex::Focusable,
            },
            Effect::FocusItem(next),
        ]);

        (state, effects)
    }
}
