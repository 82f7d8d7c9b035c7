use std::rc::Rc;

use gloo::timers::callback::Interval;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_booking_modal::use_booking_modal;
use crate::hooks::use_viewport::use_is_mobile;
use crate::services::decoration::{animated_bar_height, waveform_base_heights, WAVEFORM_SEED};

const TICK_MS: u32 = 100;
const TICKS_PER_SECOND: u32 = 1000 / TICK_MS;
const DEMO_SECONDS: u32 = 30;
const BAR_COUNT: usize = 20;
const DEFAULT_VOLUME: f64 = 0.7;

/// Simulated playback of the 30 second voice demo. Time is counted in
/// 100 ms ticks so progress never drifts.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub playing: bool,
    pub ticks: u32,
    pub volume: f64,
    pub muted: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playing: false,
            ticks: 0,
            volume: DEFAULT_VOLUME,
            muted: false,
        }
    }
}

pub enum PlayerAction {
    TogglePlayback,
    Tick,
    ToggleMute,
    SetVolume(f64),
}

impl PlayerState {
    pub fn total_ticks() -> u32 {
        DEMO_SECONDS * TICKS_PER_SECOND
    }

    pub fn elapsed_seconds(&self) -> f64 {
        f64::from(self.ticks) / f64::from(TICKS_PER_SECOND)
    }

    /// Fraction of the demo played, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        f64::from(self.ticks) / f64::from(Self::total_ticks())
    }

    pub fn effective_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// `m:ss / 0:30`
    pub fn time_label(&self) -> String {
        let seconds = self.ticks / TICKS_PER_SECOND;
        format!("{}:{:02} / 0:{:02}", seconds / 60, seconds % 60, DEMO_SECONDS)
    }
}

impl Reducible for PlayerState {
    type Action = PlayerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PlayerAction::TogglePlayback => next.playing = !next.playing,
            PlayerAction::Tick => {
                if !next.playing {
                    return self;
                }
                if next.ticks >= Self::total_ticks() {
                    next.playing = false;
                    next.ticks = 0;
                } else {
                    next.ticks += 1;
                }
            }
            PlayerAction::ToggleMute => next.muted = !next.muted,
            PlayerAction::SetVolume(volume) => next.volume = volume.clamp(0.0, 1.0),
        }
        next.into()
    }
}

#[function_component(DemoVoiceAgent)]
pub fn demo_voice_agent() -> Html {
    let modal = use_booking_modal();
    let is_mobile = use_is_mobile();
    let player = use_reducer(PlayerState::default);
    let base_heights = use_memo((), |_| waveform_base_heights(WAVEFORM_SEED, BAR_COUNT));

    {
        let player = player.clone();
        use_effect_with(player.playing, move |playing| {
            let interval = playing.then(|| {
                Interval::new(TICK_MS, move || player.dispatch(PlayerAction::Tick))
            });
            move || drop(interval)
        });
    }

    let on_toggle = {
        let player = player.clone();
        Callback::from(move |_: MouseEvent| player.dispatch(PlayerAction::TogglePlayback))
    };
    let on_mute = {
        let player = player.clone();
        Callback::from(move |_: MouseEvent| player.dispatch(PlayerAction::ToggleMute))
    };
    let on_volume = {
        let player = player.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.value().parse::<f64>() {
                Ok(volume) => player.dispatch(PlayerAction::SetVolume(volume)),
                Err(_) => log::warn!("demo: ignoring volume value '{}'", input.value()),
            }
        })
    };

    let volume_percent = player.effective_volume() * 100.0;
    let elapsed = player.elapsed_seconds();

    let visual = if is_mobile {
        html! {
            <div class={classes!("mic-pulse", player.playing.then_some("active"))}>{"🎙"}</div>
        }
    } else {
        html! {
            <div class="waveform">
                { for base_heights.iter().enumerate().map(|(i, base)| {
                    let height = animated_bar_height(*base, i, elapsed, player.playing);
                    let style = format!("height: {:.1}px; animation-delay: {:.1}s;", height, i as f64 * 0.1);
                    html! { <div key={i} class={classes!("wave-bar", player.playing.then_some("active"))} {style}></div> }
                }) }
            </div>
        }
    };

    html! {
        <section id="demo" class="section demo">
            <div class="container two-column">
                <div class="demo-text">
                    <h2>
                        {"Experience the Future of"}
                        <span class="gradient-text">{" Voice AI"}</span>
                    </h2>
                    <p>
                        {"Our advanced voice agents combine natural language processing with emotional intelligence \
                          to deliver conversational experiences that feel genuinely human."}
                    </p>
                    <ul class="demo-features">
                        <li>{"Multi-language support"}</li>
                        <li>{"Context-aware conversations"}</li>
                        <li>{"Real-time sentiment analysis"}</li>
                    </ul>
                    if !is_mobile {
                        <button class="btn btn-gradient btn-lg" onclick={modal.open_callback::<MouseEvent>()}>
                            {"Schedule Voice Agent Demo"}
                        </button>
                    }
                </div>

                <div class="audio-player">
                    <div class="player-header">
                        <div>
                            <h3>{"AI Voice Agent Demo"}</h3>
                            <p class="muted">{"30-second preview"}</p>
                        </div>
                        if is_mobile {
                            <button class="btn btn-gradient btn-sm" onclick={modal.open_callback::<MouseEvent>()}>
                                {"Tap to Try"}
                            </button>
                        }
                    </div>

                    { visual }

                    <div class="player-controls">
                        <span class="muted">{ player.time_label() }</span>
                        <button class="play-button" onclick={on_toggle}
                            aria-label={if player.playing { "Pause demo" } else { "Play demo" }}>
                            { if player.playing { "⏸" } else { "▶" } }
                        </button>
                        <span class="muted">{"Voice Demo"}</span>
                    </div>

                    <div class="volume-control">
                        <button class="mute-button" onclick={on_mute}>
                            { if player.muted { "🔇" } else { "🔊" } }
                        </button>
                        <input type="range" min="0" max="1" step="0.1"
                            value={player.effective_volume().to_string()}
                            oninput={on_volume}
                            style={format!("--fill: {:.0}%;", volume_percent)} />
                        <span class="muted">{ format!("{:.0}%", volume_percent) }</span>
                    </div>

                    <div class="progress-rail">
                        <div class="progress-fill" style={format!("width: {:.1}%;", player.progress() * 100.0)}></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
