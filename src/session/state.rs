//! Session state and its mutators

use std::rc::Rc;

use rand::distr::Open01;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::snapshot::SessionSnapshot;
use crate::balls::{BallColor, ObjectBall};
use crate::config::{Config, DisplayOptions, Pocket};
use crate::error::ConfigError;
use crate::geometry::{Point, clamp_to_table, is_point_on_ball};

/// Ball being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DragTarget {
    CueBall,
    ObjectBall,
}

/// Which object ball the user picked from the colour selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallSelection {
    /// Free placement of whatever ball is on the table
    All,
    Red,
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
}

impl BallSelection {
    pub fn as_str(&self) -> &'static str {
        match self.color() {
            Some(color) => color.as_str(),
            None => "all",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Some(BallSelection::All);
        }
        BallColor::from_key(s).map(Self::from)
    }

    pub fn color(&self) -> Option<BallColor> {
        match self {
            BallSelection::All => None,
            BallSelection::Red => Some(BallColor::Red),
            BallSelection::Yellow => Some(BallColor::Yellow),
            BallSelection::Green => Some(BallColor::Green),
            BallSelection::Brown => Some(BallColor::Brown),
            BallSelection::Blue => Some(BallColor::Blue),
            BallSelection::Pink => Some(BallColor::Pink),
            BallSelection::Black => Some(BallColor::Black),
        }
    }
}

impl From<BallColor> for BallSelection {
    fn from(color: BallColor) -> Self {
        match color {
            BallColor::Red => BallSelection::Red,
            BallColor::Yellow => BallSelection::Yellow,
            BallColor::Green => BallSelection::Green,
            BallColor::Brown => BallSelection::Brown,
            BallColor::Blue => BallSelection::Blue,
            BallColor::Pink => BallSelection::Pink,
            BallColor::Black => BallSelection::Black,
        }
    }
}

/// Guide overlay switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayToggle {
    AimingLine,
    PocketLine,
    AngleLines,
    ThicknessGuide,
    AimGuide,
    GuideLine,
    Grid,
    PositionCircle,
}

/// Change subscriber. Receives the session after every mutation.
pub type Listener = Box<dyn FnMut(&Session)>;

/// Handle for removing a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Default cue ball position, just above the D
pub const DEFAULT_CUE_BALL: Point = Point::new(1200.0, 1200.0);
/// Pocket selected at startup when configured
pub const DEFAULT_POCKET_ID: &str = "middle-top";

/// The one mutable aggregate of a run
pub struct Session {
    config: Rc<Config>,
    cue_ball: Point,
    object_ball: ObjectBall,
    selected_pocket: Pocket,
    display: DisplayOptions,
    selected_colored_balls: BallSelection,
    current_scenario: Option<String>,
    dragging: Option<DragTarget>,
    /// Red placement RNG
    rng: Pcg32,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cue_ball", &self.cue_ball)
            .field("object_ball", &self.object_ball)
            .field("selected_pocket", &self.selected_pocket.id)
            .field("display", &self.display)
            .field("selected_colored_balls", &self.selected_colored_balls)
            .field("current_scenario", &self.current_scenario)
            .field("dragging", &self.dragging)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Session {
    /// Start a session from configuration defaults
    ///
    /// The object ball starts locked on the blue spot and the top middle
    /// pocket is selected (first configured pocket if there is none).
    pub fn new(config: Rc<Config>, seed: u64) -> Result<Self, ConfigError> {
        let selected_pocket = config
            .pocket(DEFAULT_POCKET_ID)
            .or_else(|| config.table.pocket_positions.first())
            .cloned()
            .ok_or(ConfigError::NoPockets)?;
        let blue = config.spot_positions.blue;

        Ok(Self {
            cue_ball: DEFAULT_CUE_BALL,
            object_ball: ObjectBall::new(blue, BallColor::Blue, true),
            selected_pocket,
            display: config.ui.default_settings,
            selected_colored_balls: BallSelection::Blue,
            current_scenario: None,
            dragging: None,
            rng: Pcg32::seed_from_u64(seed),
            listeners: Vec::new(),
            next_listener_id: 1,
            config,
        })
    }

    // === Accessors ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cue_ball(&self) -> Point {
        self.cue_ball
    }

    pub fn object_ball(&self) -> ObjectBall {
        self.object_ball
    }

    pub fn selected_pocket(&self) -> &Pocket {
        &self.selected_pocket
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    pub fn selected_colored_balls(&self) -> BallSelection {
        self.selected_colored_balls
    }

    pub fn current_scenario(&self) -> Option<&str> {
        self.current_scenario.as_deref()
    }

    pub fn dragging(&self) -> Option<DragTarget> {
        self.dragging
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn ball_radius(&self) -> f64 {
        self.config.ball_radius()
    }

    // === Ball mutators ===

    /// Move the cue ball. The cue ball is never locked.
    pub fn set_cue_ball_position(&mut self, x: f64, y: f64) {
        self.cue_ball = Point::new(x, y);
        self.notify();
    }

    /// Move the object ball unless it is locked. Returns whether it moved.
    pub fn set_object_ball_position(&mut self, x: f64, y: f64) -> bool {
        if self.object_ball.locked {
            return false;
        }
        self.object_ball.pos = Point::new(x, y);
        self.notify();
        true
    }

    /// Change the object ball's colour without moving it
    pub fn set_object_ball_type(&mut self, color: BallColor) {
        self.object_ball.color = color;
        self.notify();
    }

    pub fn toggle_object_ball_lock(&mut self) {
        self.object_ball.locked = !self.object_ball.locked;
        self.notify();
    }

    /// Select a pocket by id. Unknown ids are ignored.
    pub fn set_selected_pocket(&mut self, pocket_id: &str) -> bool {
        let Some(pocket) = self.config.pocket(pocket_id).cloned() else {
            log::warn!("Ignoring unknown pocket '{}'", pocket_id);
            return false;
        };
        log::debug!("Selected pocket {} ({})", pocket.id, pocket.name);
        self.selected_pocket = pocket;
        self.notify();
        true
    }

    // === Display toggles ===

    pub fn toggle(&mut self, toggle: DisplayToggle) {
        let d = &mut self.display;
        let flag = match toggle {
            DisplayToggle::AimingLine => &mut d.show_aiming_line,
            DisplayToggle::PocketLine => &mut d.show_pocket_line,
            DisplayToggle::AngleLines => &mut d.show_angle_lines,
            DisplayToggle::ThicknessGuide => &mut d.show_thickness_guide,
            DisplayToggle::AimGuide => &mut d.show_aim_guide,
            DisplayToggle::GuideLine => &mut d.show_guide_line,
            DisplayToggle::Grid => &mut d.show_grid,
            DisplayToggle::PositionCircle => &mut d.show_position_circle,
        };
        *flag = !*flag;
        self.notify();
    }

    pub fn toggle_show_aiming_line(&mut self) {
        self.toggle(DisplayToggle::AimingLine);
    }

    pub fn toggle_show_pocket_line(&mut self) {
        self.toggle(DisplayToggle::PocketLine);
    }

    pub fn toggle_show_angle_lines(&mut self) {
        self.toggle(DisplayToggle::AngleLines);
    }

    pub fn toggle_show_thickness_guide(&mut self) {
        self.toggle(DisplayToggle::ThicknessGuide);
    }

    pub fn toggle_show_aim_guide(&mut self) {
        self.toggle(DisplayToggle::AimGuide);
    }

    pub fn toggle_show_guide_line(&mut self) {
        self.toggle(DisplayToggle::GuideLine);
    }

    pub fn toggle_show_grid(&mut self) {
        self.toggle(DisplayToggle::Grid);
    }

    pub fn toggle_show_position_circle(&mut self) {
        self.toggle(DisplayToggle::PositionCircle);
    }

    // === Colour selection and presets ===

    /// Pick the object ball from the colour selector
    ///
    /// - `Red`: unlocked red at a random spot past the baulk line, clear of the cushions
    /// - another colour: locked on that colour's spot
    /// - `All`: unlocks the current ball where it stands
    pub fn set_selected_colored_balls(&mut self, selection: BallSelection) {
        self.selected_colored_balls = selection;

        match selection.color() {
            Some(BallColor::Red) => {
                self.object_ball = ObjectBall::new(self.random_red_position(), BallColor::Red, false);
            }
            Some(color) => match self.config.spot(color) {
                Some(spot) => self.object_ball = ObjectBall::new(spot, color, true),
                None => log::warn!("No spot configured for {}", color),
            },
            None => self.object_ball.locked = false,
        }

        self.notify();
    }

    /// Colour selector by key ("all", "red", ...). Unknown keys are ignored.
    pub fn set_selected_colored_balls_key(&mut self, key: &str) -> bool {
        let Some(selection) = BallSelection::from_key(key) else {
            log::warn!("Ignoring unknown ball '{}'", key);
            return false;
        };
        self.set_selected_colored_balls(selection);
        true
    }

    /// Random point strictly inside the area right of the baulk line, `margin`
    /// clear of baulk and every cushion
    fn random_red_position(&mut self) -> Point {
        let table = &self.config.table;
        let margin = self.config.tolerances.red_placement_margin;
        let baulk = table.baulk_line.distance_from_bottom;

        let span_x = (table.length() - baulk - margin * 2.0).max(0.0);
        let span_y = (table.width() - margin * 2.0).max(0.0);

        let x = baulk + margin + self.rng.sample::<f64, _>(Open01) * span_x;
        let y = margin + self.rng.sample::<f64, _>(Open01) * span_y;
        Point::new(x, y)
    }

    /// Replace both balls and the pocket with a named preset. Unknown ids are ignored.
    pub fn load_scenario(&mut self, scenario_id: &str) -> bool {
        let Some(scenario) = self.config.scenario(scenario_id).cloned() else {
            log::warn!("Ignoring unknown scenario '{}'", scenario_id);
            return false;
        };

        self.cue_ball = scenario.balls.cue_ball;
        self.object_ball = scenario.balls.object_ball;
        match self.config.pocket(&scenario.target_pocket) {
            Some(pocket) => self.selected_pocket = pocket.clone(),
            None => log::warn!(
                "Scenario '{}' targets unknown pocket '{}'",
                scenario.id,
                scenario.target_pocket
            ),
        }
        log::debug!("Loaded scenario '{}'", scenario.name);
        self.current_scenario = Some(scenario.id);
        self.notify();
        true
    }

    /// Put back a saved position
    ///
    /// The pocket is matched by id against the configured pockets; an unknown
    /// id keeps the current selection.
    pub fn restore(&mut self, cue_ball: Point, object_ball: ObjectBall, pocket_id: &str) {
        self.cue_ball = cue_ball;
        self.object_ball = object_ball;
        match self.config.pocket(pocket_id) {
            Some(pocket) => self.selected_pocket = pocket.clone(),
            None => log::warn!("Restored position names unknown pocket '{}'", pocket_id),
        }
        self.notify();
    }

    // === Dragging ===

    /// Begin dragging a ball
    ///
    /// Refused (returns false, nothing changes) for a locked object ball or
    /// while another drag is in progress.
    pub fn start_dragging(&mut self, target: DragTarget) -> bool {
        if self.dragging.is_some() {
            return false;
        }
        if target == DragTarget::ObjectBall && self.object_ball.locked {
            log::debug!("Object ball is locked, not dragging");
            return false;
        }
        self.dragging = Some(target);
        true
    }

    pub fn stop_dragging(&mut self) {
        self.dragging = None;
    }

    /// Move the dragged ball, kept on the cloth. Returns whether anything moved.
    pub fn drag_to(&mut self, point: Point) -> bool {
        let Some(target) = self.dragging else {
            return false;
        };
        let p = clamp_to_table(point, self.ball_radius(), &self.config.table);
        match target {
            DragTarget::CueBall => {
                self.set_cue_ball_position(p.x, p.y);
                true
            }
            DragTarget::ObjectBall => self.set_object_ball_position(p.x, p.y),
        }
    }

    /// Ball under `point`, cue ball first
    pub fn pick_ball(&self, point: Point) -> Option<DragTarget> {
        let radius = self.ball_radius();
        let slop = self.config.tolerances.hit_slop;
        if is_point_on_ball(point, self.cue_ball, radius, slop) {
            Some(DragTarget::CueBall)
        } else if is_point_on_ball(point, self.object_ball.pos, radius, slop) {
            Some(DragTarget::ObjectBall)
        } else {
            None
        }
    }

    // === Listeners ===

    pub fn add_listener(&mut self, listener: impl FnMut(&Session) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Call every listener in registration order with the current state
    pub fn notify(&mut self) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(self);
        }
        self.listeners = listeners;
    }

    /// Owned copy of the session fields
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cue_ball: self.cue_ball,
            object_ball: self.object_ball,
            selected_pocket: self.selected_pocket.clone(),
            display: self.display,
            selected_colored_balls: self.selected_colored_balls,
            current_scenario: self.current_scenario.clone(),
            dragging: self.dragging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};

    fn session() -> Session {
        Session::new(Rc::new(Config::default()), 12345).unwrap()
    }

    /// Count notifications
    fn counter(session: &mut Session) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        session.add_listener(move |_| c.set(c.get() + 1));
        count
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert_eq!(s.cue_ball(), DEFAULT_CUE_BALL);
        assert_eq!(s.object_ball().color, BallColor::Blue);
        assert!(s.object_ball().locked);
        assert_eq!(s.object_ball().pos, s.config().spot_positions.blue);
        assert_eq!(s.selected_pocket().id, "middle-top");
        assert_eq!(s.selected_colored_balls(), BallSelection::Blue);
        assert_eq!(s.dragging(), None);
    }

    #[test]
    fn test_cue_ball_always_moves() {
        let mut s = session();
        let count = counter(&mut s);
        s.set_cue_ball_position(500.0, 600.0);
        assert_eq!(s.cue_ball(), Point::new(500.0, 600.0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_locked_object_ball_ignores_moves() {
        let mut s = session();
        let count = counter(&mut s);
        let before = s.object_ball();

        assert!(!s.set_object_ball_position(10.0, 10.0));
        assert_eq!(s.object_ball(), before);
        assert_eq!(count.get(), 0);

        s.toggle_object_ball_lock();
        assert!(s.set_object_ball_position(10.0, 10.0));
        assert_eq!(s.object_ball().pos, Point::new(10.0, 10.0));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_set_object_ball_type_keeps_position() {
        let mut s = session();
        let pos = s.object_ball().pos;
        s.set_object_ball_type(BallColor::Pink);
        assert_eq!(s.object_ball().color, BallColor::Pink);
        assert_eq!(s.object_ball().pos, pos);
    }

    #[test]
    fn test_unknown_pocket_is_ignored() {
        let mut s = session();
        let count = counter(&mut s);
        assert!(!s.set_selected_pocket("side-door"));
        assert_eq!(s.selected_pocket().id, "middle-top");
        assert_eq!(count.get(), 0);

        assert!(s.set_selected_pocket("bottom-left"));
        assert_eq!(s.selected_pocket().name, "F");
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut s = session();
        let count = counter(&mut s);
        let before = *s.display();

        s.toggle_show_grid();
        assert_eq!(s.display().show_grid, !before.show_grid);
        assert_eq!(s.display().show_aiming_line, before.show_aiming_line);

        s.toggle_show_position_circle();
        s.toggle_show_aiming_line();
        s.toggle_show_pocket_line();
        s.toggle_show_angle_lines();
        s.toggle_show_thickness_guide();
        s.toggle_show_aim_guide();
        s.toggle_show_guide_line();
        assert_eq!(count.get(), 8);

        let after = *s.display();
        assert_eq!(after.show_position_circle, !before.show_position_circle);
        assert_eq!(after.show_guide_line, !before.show_guide_line);

        s.toggle(DisplayToggle::Grid);
        assert_eq!(s.display().show_grid, before.show_grid);
    }

    #[test]
    fn test_select_colour_moves_to_spot_and_locks() {
        let mut s = session();
        s.set_selected_colored_balls(BallSelection::All);
        s.set_object_ball_position(100.0, 100.0);

        let count = counter(&mut s);
        s.set_selected_colored_balls(BallSelection::Black);
        let ball = s.object_ball();
        assert_eq!(ball.color, BallColor::Black);
        assert_eq!(ball.pos, s.config().spot_positions.black);
        assert!(ball.locked);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_select_all_unlocks_in_place() {
        let mut s = session();
        let before = s.object_ball();
        s.set_selected_colored_balls(BallSelection::All);
        let after = s.object_ball();
        assert!(!after.locked);
        assert_eq!(after.pos, before.pos);
        assert_eq!(after.color, before.color);
        assert_eq!(s.selected_colored_balls(), BallSelection::All);
    }

    #[test]
    fn test_red_placement_stays_in_safe_area() {
        let mut s = session();
        let config = Config::default();
        let margin = config.tolerances.red_placement_margin;
        let baulk = config.table.baulk_line.distance_from_bottom;

        for _ in 0..500 {
            s.set_selected_colored_balls(BallSelection::Red);
            let ball = s.object_ball();
            assert_eq!(ball.color, BallColor::Red);
            assert!(!ball.locked);
            assert!(ball.pos.x > baulk + margin);
            assert!(ball.pos.x < config.table.length() - margin);
            assert!(ball.pos.y > margin);
            assert!(ball.pos.y < config.table.width() - margin);
        }
    }

    proptest! {
        #[test]
        fn prop_red_placement_any_seed(seed in any::<u64>()) {
            let config = Rc::new(Config::default());
            let margin = config.tolerances.red_placement_margin;
            let baulk = config.table.baulk_line.distance_from_bottom;
            let mut s = Session::new(config.clone(), seed).unwrap();

            s.set_selected_colored_balls(BallSelection::Red);
            let pos = s.object_ball().pos;
            prop_assert!(pos.x > baulk + margin && pos.x < config.table.length() - margin);
            prop_assert!(pos.y > margin && pos.y < config.table.width() - margin);
        }
    }

    #[test]
    fn test_red_placement_is_seeded() {
        let mut a = session();
        let mut b = session();
        a.set_selected_colored_balls(BallSelection::Red);
        b.set_selected_colored_balls(BallSelection::Red);
        assert_eq!(a.object_ball(), b.object_ball());
    }

    #[test]
    fn test_load_scenario() {
        let mut s = session();
        let count = counter(&mut s);
        assert!(s.load_scenario("loose-red"));
        assert_eq!(count.get(), 1);
        assert_eq!(s.cue_ball(), Point::new(2300.0, 600.0));
        assert_eq!(s.object_ball().color, BallColor::Red);
        assert!(!s.object_ball().locked);
        assert_eq!(s.selected_pocket().id, "bottom-right");
        assert_eq!(s.current_scenario(), Some("loose-red"));

        assert!(!s.load_scenario("nope"));
        assert_eq!(count.get(), 1);
        assert_eq!(s.current_scenario(), Some("loose-red"));
    }

    #[test]
    fn test_drag_state_machine() {
        let mut s = session();
        // Locked object ball cannot be dragged
        assert!(!s.start_dragging(DragTarget::ObjectBall));
        assert_eq!(s.dragging(), None);

        assert!(s.start_dragging(DragTarget::CueBall));
        assert_eq!(s.dragging(), Some(DragTarget::CueBall));

        // One drag at a time, even for an unlocked object ball
        s.set_selected_colored_balls(BallSelection::All);
        assert!(!s.start_dragging(DragTarget::ObjectBall));
        assert_eq!(s.dragging(), Some(DragTarget::CueBall));

        s.stop_dragging();
        assert!(!s.is_dragging());
        assert!(s.start_dragging(DragTarget::ObjectBall));
        s.stop_dragging();
        s.stop_dragging();
        assert_eq!(s.dragging(), None);
    }

    #[test]
    fn test_drag_to_clamps_and_respects_lock() {
        let mut s = session();
        let r = s.ball_radius();
        assert!(!s.drag_to(Point::new(1.0, 1.0)));

        s.start_dragging(DragTarget::CueBall);
        assert!(s.drag_to(Point::new(-100.0, 900.0)));
        assert_eq!(s.cue_ball(), Point::new(r, 900.0));
        s.stop_dragging();

        s.set_selected_colored_balls(BallSelection::All);
        s.start_dragging(DragTarget::ObjectBall);
        // Locking mid-drag freezes the ball
        s.toggle_object_ball_lock();
        let before = s.object_ball().pos;
        assert!(!s.drag_to(Point::new(2000.0, 500.0)));
        assert_eq!(s.object_ball().pos, before);
    }

    #[test]
    fn test_pick_ball() {
        let s = session();
        assert_eq!(s.pick_ball(Point::new(1205.0, 1195.0)), Some(DragTarget::CueBall));
        assert_eq!(
            s.pick_ball(s.config().spot_positions.blue),
            Some(DragTarget::ObjectBall)
        );
        assert_eq!(s.pick_ball(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_listeners_run_in_order_and_can_be_removed() {
        let mut s = session();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let l1 = calls.clone();
        let first = s.add_listener(move |state| l1.borrow_mut().push(("first", state.cue_ball())));
        let l2 = calls.clone();
        s.add_listener(move |state| l2.borrow_mut().push(("second", state.cue_ball())));

        s.set_cue_ball_position(1.0, 2.0);
        assert_eq!(
            *calls.borrow(),
            vec![("first", Point::new(1.0, 2.0)), ("second", Point::new(1.0, 2.0))]
        );

        assert!(s.remove_listener(first));
        assert!(!s.remove_listener(first));
        s.set_cue_ball_position(3.0, 4.0);
        assert_eq!(calls.borrow().len(), 3);
        assert_eq!(calls.borrow()[2].0, "second");
    }

    #[test]
    fn test_snapshot_does_not_alias() {
        let mut s = session();
        let snap = s.snapshot();
        s.set_cue_ball_position(1.0, 1.0);
        s.set_selected_pocket("top-left");
        assert_eq!(snap.cue_ball, DEFAULT_CUE_BALL);
        assert_eq!(snap.selected_pocket.id, "middle-top");

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["selectedColoredBalls"], "blue");
        assert_eq!(json["showGrid"], true);
        assert_eq!(json["objectBall"]["type"], "blue");
    }

    #[test]
    fn test_restore() {
        let mut s = session();
        let count = counter(&mut s);
        let ball = ObjectBall::new(Point::new(3000.0, 300.0), BallColor::Pink, false);
        s.restore(Point::new(2000.0, 900.0), ball, "top-right");
        assert_eq!(s.object_ball(), ball);
        assert_eq!(s.selected_pocket().id, "top-right");
        assert_eq!(count.get(), 1);

        s.restore(Point::new(2000.0, 900.0), ball, "gone");
        assert_eq!(s.selected_pocket().id, "top-right");
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(BallSelection::from_key("ALL"), Some(BallSelection::All));
        assert_eq!(BallSelection::from_key("pink"), Some(BallSelection::Pink));
        assert_eq!(BallSelection::from_key("white"), None);
        assert_eq!(BallSelection::Red.as_str(), "red");
        assert_eq!(BallSelection::All.as_str(), "all");
    }

    #[test]
    fn test_unknown_colour_key_is_ignored() {
        let mut s = session();
        let count = counter(&mut s);
        let before = s.object_ball();
        assert!(!s.set_selected_colored_balls_key("white"));
        assert_eq!(s.object_ball(), before);
        assert_eq!(count.get(), 0);

        assert!(s.set_selected_colored_balls_key("green"));
        assert_eq!(s.object_ball().color, BallColor::Green);
        assert_eq!(count.get(), 1);
    }
}
