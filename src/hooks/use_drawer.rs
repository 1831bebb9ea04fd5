use yew::prelude::*;

/// Drawer de navegación en pantallas estrechas
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub open: bool,
}

impl DrawerState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

pub struct UseDrawerHandle {
    pub state: UseStateHandle<DrawerState>,
    pub toggle: Callback<MouseEvent>,
    pub close: Callback<MouseEvent>,
}

#[hook]
pub fn use_drawer() -> UseDrawerHandle {
    let state = use_state(DrawerState::default);

    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.toggled());
        })
    };

    // Overlay, botón de cerrar y links dentro del drawer
    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            if state.open {
                state.set(state.closed());
            }
        })
    };

    UseDrawerHandle {
        state,
        toggle,
        close,
    }
}
