use rmk_charybdis::charybdis::SIZE;
use rmk_charybdis::keycode::{Keyboard, Media};
use rmk_charybdis::keystate::LayerControl;
use rmk_charybdis::pointer::MotionReport;
use rmk_charybdis::{Charybdis, Config, Event, Output};

const ROLLOVER: usize = 8;

// Key positions
const Q: usize = 0;
const W_7: usize = 1;
const DPI_MOD: usize = 3;
const U_F7: usize = 6;
const F_LSFT: usize = 13;
const H_CW_TOGG: usize = 15;
const J_LEFT: usize = 16;
const Z_POINTER: usize = 20;
const X_DRGSCRL: usize = 21;
const D_PERC: usize = 12;
const B_BOOT: usize = 24;
const ESC_MED: usize = 30;
const SPC_NAV: usize = 31;
const TAB_FUN: usize = 32;
const ENT_SYM: usize = 33;
const BSP_NUM: usize = 34;
const POINTER: u8 = 4;

/// One scan tick per millisecond
struct Board {
    keyboard: Charybdis<ROLLOVER>,
    presses: [bool; SIZE],
    now: u64,
}

impl Board {
    fn new() -> Self {
        Self::with_config(Config::default())
    }

    fn with_config(config: Config) -> Self {
        Board {
            keyboard: Charybdis::new(&config).unwrap(),
            presses: [false; SIZE],
            now: 0,
        }
    }

    fn press(&mut self, key: usize) -> Output<ROLLOVER> {
        self.presses[key] = true;
        self.step()
    }

    fn release(&mut self, key: usize) -> Output<ROLLOVER> {
        self.presses[key] = false;
        self.step()
    }

    fn step(&mut self) -> Output<ROLLOVER> {
        self.step_with(MotionReport::default())
    }

    fn step_with(&mut self, motion: MotionReport) -> Output<ROLLOVER> {
        self.now += 1;
        self.keyboard.tick(&self.presses, motion, self.now)
    }

    /// Ticks `ms` times, collecting every event on the way
    fn wait(&mut self, ms: u64) -> (Output<ROLLOVER>, Vec<Event>) {
        let mut events = Vec::new();
        let mut output = self.step();
        events.extend(output.events.iter().copied());
        for _ in 1..ms {
            output = self.step();
            events.extend(output.events.iter().copied());
        }
        (output, events)
    }

    fn hold(&mut self, key: usize) {
        self.press(key);
        self.wait(200);
    }

    fn on_layer(&self, layer: u8) -> bool {
        self.keyboard.keymap().layer_state().cmp(layer)
    }
}

#[test]
fn home_row_mod_tap() {
    let mut board = Board::new();
    assert!(board.press(F_LSFT).report.keys.is_empty());
    assert_eq!(board.release(F_LSFT).report.keys, [Keyboard::F]);
    let (output, _) = board.wait(10);
    assert!(output.report.keys.is_empty());
}

#[test]
fn home_row_mod_hold() {
    let mut board = Board::new();
    board.press(F_LSFT);
    let (output, _) = board.wait(199);
    assert!(output.report.keys.is_empty());
    assert_eq!(board.step().report.keys, [Keyboard::LeftShift]);
    assert_eq!(
        board.press(Q).report.keys,
        [Keyboard::Q, Keyboard::LeftShift]
    );
    board.release(F_LSFT);
    assert_eq!(board.release(Q).report.keys, []);
}

#[test]
fn navigation_layer() {
    let mut board = Board::new();
    board.hold(SPC_NAV);
    assert!(board.on_layer(2));
    assert_eq!(board.press(J_LEFT).report.keys, [Keyboard::LeftArrow]);
    board.release(J_LEFT);
    // No space after a hold
    assert!(board.release(SPC_NAV).report.keys.is_empty());
    assert!(!board.on_layer(2));

    board.wait(200);
    assert!(board.press(J_LEFT).report.keys.is_empty());
    assert_eq!(board.release(J_LEFT).report.keys, [Keyboard::J]);
}

#[test]
fn space_rolled_onto_w_keeps_order() {
    let mut board = Board::new();
    assert!(board.press(SPC_NAV).report.keys.is_empty());
    assert!(board.press(W_7).report.keys.is_empty());
    assert_eq!(board.release(SPC_NAV).report.keys, [Keyboard::Space]);
    assert_eq!(board.step().report.keys, [Keyboard::W, Keyboard::Space]);
    assert!(!board.on_layer(2));
    let (output, _) = board.wait(10);
    assert_eq!(output.report.keys, [Keyboard::W]);
    assert!(board.release(W_7).report.keys.is_empty());
}

#[test]
fn key_pressed_before_hold_uses_navigation_layer() {
    let mut board = Board::new();
    board.press(SPC_NAV);
    board.press(J_LEFT);
    let (output, _) = board.wait(199);
    assert!(output.report.keys.is_empty());
    assert!(board.on_layer(2));
    assert_eq!(board.step().report.keys, [Keyboard::LeftArrow]);
    board.release(J_LEFT);
    board.release(SPC_NAV);
    assert!(!board.on_layer(2));
}

#[test]
fn function_layer() {
    let mut board = Board::new();
    board.hold(TAB_FUN);
    assert!(board.on_layer(1));
    assert_eq!(board.press(U_F7).report.keys, [Keyboard::F7]);
    board.release(U_F7);
    assert!(board.release(TAB_FUN).report.keys.is_empty());
    assert!(!board.on_layer(1));

    board.press(TAB_FUN);
    assert_eq!(board.release(TAB_FUN).report.keys, [Keyboard::Tab]);
}

#[test]
fn numeral_layer() {
    let mut board = Board::new();
    board.hold(BSP_NUM);
    assert!(board.on_layer(5));
    assert_eq!(board.press(W_7).report.keys, [Keyboard::Keyboard7]);
    board.release(W_7);
    // Left thumb is `.` here
    assert_eq!(board.press(ESC_MED).report.keys, [Keyboard::Dot]);
    board.release(ESC_MED);
    assert!(board.release(BSP_NUM).report.keys.is_empty());
    assert!(!board.on_layer(5));
}

#[test]
fn shifted_symbols() {
    let mut board = Board::new();
    board.hold(ENT_SYM);
    assert_eq!(
        board.press(D_PERC).report.keys,
        [Keyboard::LeftShift, Keyboard::Keyboard5]
    );
}

#[test]
fn media_keys() {
    let mut board = Board::new();
    board.hold(ESC_MED);
    let output = board.press(J_LEFT);
    assert_eq!(output.report.media, Some(Media::VolumeDown));
    assert!(output.report.keys.is_empty());
}

#[test]
fn long_press_bootloader_fires_once() {
    let mut board = Board::new();
    board.hold(ESC_MED);

    board.press(B_BOOT);
    let (_, events) = board.wait(1_000);
    assert_eq!(events, [Event::Bootloader]);
    let output = board.release(B_BOOT);
    assert!(output.events.is_empty());
}

#[test]
fn long_press_tap_does_nothing() {
    let mut board = Board::new();
    board.hold(ESC_MED);

    board.press(B_BOOT);
    let (_, events) = board.wait(100);
    board.release(B_BOOT);
    let (_, after) = board.wait(1_000);
    assert!(events.is_empty());
    assert!(after.is_empty());
}

#[test]
fn leaving_pointer_layer_stops_dragscroll() {
    let mut board = Board::new();
    board.hold(Z_POINTER);
    assert!(board.on_layer(POINTER));

    board.press(X_DRGSCRL);
    assert!(board.keyboard.pointer().dragscroll());
    let output = board.step_with(MotionReport::moving(6, 0));
    assert_eq!(
        output.motion,
        MotionReport {
            h: 1,
            ..Default::default()
        }
    );

    board.release(Z_POINTER);
    assert!(!board.on_layer(POINTER));
    assert!(!board.keyboard.pointer().dragscroll());
    let output = board.step_with(MotionReport::moving(6, 0));
    assert_eq!(output.motion, MotionReport::moving(6, 0));
}

#[test]
fn dpi_change_event() {
    let mut board = Board::new();
    board.hold(Z_POINTER);
    let output = board.press(DPI_MOD);
    assert_eq!(output.events, [Event::Dpi(600)]);
    assert_eq!(board.keyboard.pointer().dpi(), 600);
}

#[test]
fn auto_mouse_layer() {
    let mut board = Board::new();
    board.step_with(MotionReport::moving(6, 6));
    assert!(board.on_layer(POINTER));
    assert!(board.keyboard.auto_mouse().is_active());

    assert_eq!(board.press(SPC_NAV).report.buttons, 1);
    let (output, _) = board.wait(1_000);
    assert!(board.on_layer(POINTER));
    assert_eq!(output.report.buttons, 1);

    board.release(SPC_NAV);
    let (_, _) = board.wait(649);
    assert!(board.on_layer(POINTER));
    board.step();
    assert!(!board.on_layer(POINTER));
}

#[test]
fn auto_mouse_dropped_by_typing() {
    let mut board = Board::new();
    board.step_with(MotionReport::moving(20, 0));
    assert!(board.on_layer(POINTER));

    // Transparent on the pointer layer, so this is the base layer's Z
    board.press(Z_POINTER);
    assert_eq!(board.release(Z_POINTER).report.keys, [Keyboard::Z]);
    assert!(!board.on_layer(POINTER));
    assert!(!board.keyboard.auto_mouse().is_active());
}

#[test]
fn auto_mouse_kept_by_pointer_layer_key() {
    let mut board = Board::new();
    board.step_with(MotionReport::moving(20, 0));
    assert!(board.keyboard.auto_mouse().is_active());

    // Transparent on the pointer layer, so this is the base layer's pointer layer tap
    board.press(Z_POINTER);
    board.wait(1_000);
    assert!(board.on_layer(POINTER));
    assert!(board.keyboard.auto_mouse().is_active());
    assert_eq!(board.press(SPC_NAV).report.buttons, 1);

    board.release(SPC_NAV);
    board.release(Z_POINTER);
    assert!(!board.on_layer(POINTER));
    assert!(!board.keyboard.auto_mouse().is_active());
}

#[test]
fn dead_key_ends_auto_mouse() {
    let mut board = Board::new();
    board.step_with(MotionReport::moving(20, 0));
    assert!(board.on_layer(POINTER));

    // `KC_NO` on the pointer layer
    let output = board.press(Q);
    assert!(output.report.keys.is_empty());
    assert!(!board.on_layer(POINTER));
    assert!(!board.keyboard.auto_mouse().is_active());
}

#[test]
fn auto_mouse_disabled() {
    let mut board = Board::with_config(Config {
        auto_mouse: false,
        ..Config::default()
    });
    board.step_with(MotionReport::moving(50, 50));
    assert!(!board.on_layer(POINTER));
}

#[test]
fn caps_word() {
    let mut board = Board::new();
    board.hold(SPC_NAV);
    board.press(H_CW_TOGG);
    assert!(board.keyboard.caps_word().is_active());
    board.release(H_CW_TOGG);
    board.release(SPC_NAV);
    board.wait(200);

    assert_eq!(
        board.press(Q).report.keys,
        [Keyboard::Q, Keyboard::LeftShift]
    );
    board.release(Q);
    assert!(board.keyboard.caps_word().is_active());

    board.press(SPC_NAV);
    assert_eq!(board.release(SPC_NAV).report.keys, [Keyboard::Space]);
    assert!(!board.keyboard.caps_word().is_active());
}
