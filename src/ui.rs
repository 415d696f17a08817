use piston_window::*;

const TRACK_COLOR: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
const FILL_COLOR: [f32; 4] = [0.35, 0.45, 0.65, 1.0];
const BUTTON_COLOR: [f32; 4] = [0.55, 0.55, 0.55, 1.0];
const BUTTON_HOVER_COLOR: [f32; 4] = [0.45, 0.45, 0.5, 1.0];

/// Mouse state the frame loop tracks from piston events and hands to every
/// widget once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub cursor: [f64; 2],
    pub down: bool,
    pub just_pressed: bool,
}

fn contains(rect: [f64; 4], point: [f64; 2]) -> bool {
    point[0] >= rect[0]
        && point[0] <= rect[0] + rect[2]
        && point[1] >= rect[1]
        && point[1] <= rect[1] + rect[3]
}

/// Horizontal slider bound to an `f32`. Dragging anywhere on the track maps
/// the cursor linearly into `[min, max]`; the drag keeps following the
/// cursor until release even if it leaves the rectangle.
pub struct Slider {
    rect: [f64; 4],
    min: f32,
    max: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(rect: [f64; 4], (min, max): (f32, f32)) -> Self {
        Slider {
            rect,
            min,
            max,
            dragging: false,
        }
    }

    /// Updates `value` from the current mouse state. The bound value is
    /// mutated in place, which is what makes a mid-run parameter change
    /// visible to the very next integration step.
    pub fn update(&mut self, mouse: MouseState, value: &mut f32) {
        if mouse.just_pressed && contains(self.rect, mouse.cursor) {
            self.dragging = true;
        }
        if !mouse.down {
            self.dragging = false;
        }
        if self.dragging {
            let t = ((mouse.cursor[0] - self.rect[0]) / self.rect[2]).clamp(0.0, 1.0) as f32;
            *value = self.min + (self.max - self.min) * t;
        }
    }

    pub fn draw(&self, value: f32, transform: math::Matrix2d, g: &mut G2d) {
        rectangle(TRACK_COLOR, self.rect, transform, g);
        let span = self.max - self.min;
        let t = if span > 0.0 {
            ((value - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let [x, y, w, h] = self.rect;
        rectangle(FILL_COLOR, [x, y, w * f64::from(t), h], transform, g);
    }

    /// Position for the value text to the right of the track.
    pub fn value_pos(&self) -> [f64; 2] {
        [self.rect[0] + self.rect[2] + 8.0, self.rect[1] + self.rect[3]]
    }

    /// Widens the range upper bound, used by the plot scroll slider as the
    /// series outgrows the window.
    pub fn set_max(&mut self, max: f32) {
        self.max = max;
    }
}

/// Stateless trigger button: fires once per left-button press inside its
/// rectangle.
pub struct ActionButton {
    rect: [f64; 4],
}

impl ActionButton {
    pub fn new(rect: [f64; 4]) -> Self {
        ActionButton { rect }
    }

    pub fn clicked(&self, mouse: MouseState) -> bool {
        mouse.just_pressed && contains(self.rect, mouse.cursor)
    }

    pub fn draw(&self, mouse: MouseState, transform: math::Matrix2d, g: &mut G2d) {
        let color = if contains(self.rect, mouse.cursor) {
            BUTTON_HOVER_COLOR
        } else {
            BUTTON_COLOR
        };
        rectangle(color, self.rect, transform, g);
    }

    pub fn label_pos(&self) -> [f64; 2] {
        [self.rect[0] + 8.0, self.rect[1] + self.rect[3] - 5.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn press_at(x: f64, y: f64) -> MouseState {
        MouseState {
            cursor: [x, y],
            down: true,
            just_pressed: true,
        }
    }

    #[test]
    fn slider_maps_cursor_linearly() {
        let mut slider = Slider::new([100.0, 10.0, 200.0, 20.0], (0.01, 1.0));
        let mut value = 0.5;

        slider.update(press_at(200.0, 20.0), &mut value);
        assert_relative_eq!(value, 0.505, epsilon = 1e-4);

        slider.update(press_at(100.0, 20.0), &mut value);
        assert_relative_eq!(value, 0.01, epsilon = 1e-6);

        slider.update(press_at(300.0, 20.0), &mut value);
        assert_relative_eq!(value, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn slider_clamps_while_dragging_outside() {
        let mut slider = Slider::new([0.0, 0.0, 100.0, 20.0], (0.0, 10.0));
        let mut value = 5.0;
        slider.update(press_at(50.0, 10.0), &mut value);

        // Still held down, cursor way past the right edge.
        let dragged = MouseState {
            cursor: [500.0, 300.0],
            down: true,
            just_pressed: false,
        };
        slider.update(dragged, &mut value);
        assert_relative_eq!(value, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn slider_ignores_presses_outside_the_track() {
        let mut slider = Slider::new([0.0, 0.0, 100.0, 20.0], (0.0, 10.0));
        let mut value = 5.0;
        slider.update(press_at(50.0, 200.0), &mut value);
        assert_relative_eq!(value, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn button_fires_only_on_press_inside() {
        let button = ActionButton::new([10.0, 10.0, 50.0, 20.0]);
        assert!(button.clicked(press_at(30.0, 20.0)));
        assert!(!button.clicked(press_at(100.0, 20.0)));

        let held = MouseState {
            cursor: [30.0, 20.0],
            down: true,
            just_pressed: false,
        };
        assert!(!button.clicked(held));
    }
}
