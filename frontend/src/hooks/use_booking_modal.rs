use yew::prelude::*;

/// Shared open/close switch for the booking modal.
///
/// Provided once by [`BookingModalProvider`] at the page shell and read by
/// every component that can open the booking flow.
#[derive(Clone, PartialEq)]
pub struct BookingModalHandle {
    is_open: UseStateHandle<bool>,
}

impl BookingModalHandle {
    pub fn is_open(&self) -> bool {
        *self.is_open
    }

    pub fn open(&self) {
        self.is_open.set(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
    }

    /// Callback that opens the modal, ignoring the event payload
    pub fn open_callback<E: 'static>(&self) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_: E| handle.open())
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(BookingModalProvider)]
pub fn booking_modal_provider(props: &BookingModalProviderProps) -> Html {
    let is_open = use_state(|| false);
    let handle = BookingModalHandle { is_open };

    html! {
        <ContextProvider<BookingModalHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<BookingModalHandle>>
    }
}

#[hook]
pub fn use_booking_modal() -> BookingModalHandle {
    use_context::<BookingModalHandle>()
        .expect("use_booking_modal must be called below BookingModalProvider")
}
