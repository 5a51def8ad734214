use std::time::Duration;

use pretty_assertions::assert_eq;

use countdown::{
    core::{
        msg::{field::FieldMsg, timer::TimerMsg},
        state::timer::Phase,
    },
    domain::field::FieldRole,
    infrastructure::{config::Config, ticker::TickerService},
    AppState, Msg, Runtime,
};

fn runtime_with_ticker() -> Runtime {
    let config = Config::embedded().expect("embedded config");
    let state = AppState::new_with_config(config).expect("default layout");
    let mut runtime = Runtime::new(state);
    runtime.set_executor();

    let (ticker_tx, _cancel, service) = TickerService::new(runtime.get_raw_sender());
    service.run();
    runtime
        .add_ticker_sender(ticker_tx)
        .expect("executor is set");
    runtime
}

fn set(runtime: &mut Runtime, role: FieldRole, value: &str) {
    runtime.send_msg(Msg::Field(FieldMsg::Set(role, value.to_owned())));
}

/// Let the ticker run for `ms` of (paused) time, then fold its ticks into state
async fn advance(runtime: &mut Runtime, ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    runtime.run_update_cycle().expect("executor is set");
}

#[tokio::test(start_paused = true)]
async fn test_countdown_to_expiry() {
    let mut runtime = runtime_with_ticker();
    set(&mut runtime, FieldRole::Seconds, "3");
    runtime.send_msg(Msg::Timer(TimerMsg::ControlActivate));
    runtime.run_update_cycle().expect("executor is set");
    assert_eq!(runtime.state().timer.display_text(), "00:00:03");

    advance(&mut runtime, 1_100).await;
    assert_eq!(runtime.state().timer.display_text(), "00:00:02");

    advance(&mut runtime, 1_000).await;
    assert_eq!(runtime.state().timer.display_text(), "00:00:01");

    advance(&mut runtime, 1_000).await;
    let timer = &runtime.state().timer;
    assert_eq!(timer.display_text(), "00:00:00");
    assert_eq!(timer.phase(), Phase::Idle);
    assert_eq!(timer.control_label(), "Start");
    assert_eq!(timer.state().active_ticker(), None);

    // The ticker was cancelled on expiry
    advance(&mut runtime, 3_000).await;
    assert_eq!(runtime.state().timer.display_text(), "00:00:00");
    assert_eq!(runtime.get_stats().remaining_seconds, 0);
}

#[tokio::test(start_paused = true)]
async fn test_pause_stops_ticks_and_resume_continues() {
    let mut runtime = runtime_with_ticker();
    set(&mut runtime, FieldRole::Minutes, "1");
    runtime.send_msg(Msg::Timer(TimerMsg::ControlActivate));
    runtime.run_update_cycle().expect("executor is set");

    advance(&mut runtime, 2_500).await;
    assert_eq!(runtime.state().timer.display_text(), "00:00:58");

    runtime.send_msg(Msg::Timer(TimerMsg::ControlActivate));
    runtime.run_update_cycle().expect("executor is set");
    assert_eq!(runtime.state().timer.control_label(), "Resume");

    advance(&mut runtime, 5_000).await;
    assert_eq!(runtime.state().timer.display_text(), "00:00:58");

    // Edits while paused are ignored on resume
    set(&mut runtime, FieldRole::Minutes, "9");
    runtime.send_msg(Msg::Timer(TimerMsg::ControlActivate));
    runtime.run_update_cycle().expect("executor is set");
    assert_eq!(runtime.state().timer.phase(), Phase::Running);

    advance(&mut runtime, 1_100).await;
    assert_eq!(runtime.state().timer.display_text(), "00:00:57");
}

#[tokio::test(start_paused = true)]
async fn test_reset_while_running_cancels_ticker() {
    let mut runtime = runtime_with_ticker();
    set(&mut runtime, FieldRole::Seconds, "10");
    runtime.send_msg(Msg::Timer(TimerMsg::ControlActivate));
    runtime.run_update_cycle().expect("executor is set");

    advance(&mut runtime, 1_100).await;
    assert_eq!(runtime.state().timer.display_text(), "00:00:09");

    runtime.send_msg(Msg::Timer(TimerMsg::ResetActivate));
    runtime.run_update_cycle().expect("executor is set");
    advance(&mut runtime, 3_000).await;

    let timer = &runtime.state().timer;
    assert_eq!(timer.display_text(), "00:00:00");
    assert_eq!(timer.phase(), Phase::Idle);
    assert_eq!(timer.elements().seconds.value(), "00");
}
