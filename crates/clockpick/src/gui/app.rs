use crate::config::{self, Config, Placement};
use crate::events::AppEvent;
use crate::gui::clock::{self, Layout, PanelKind, Target};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use clockface::{Picker, PickerEvent, Point, PointerInput, Step, TimeText};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

pub struct AppModel {
    pub picker: Rc<RefCell<Picker>>,
    pub layout: Rc<RefCell<Option<Layout>>>,
    pub placement: Placement,
    pub anchor: Option<Point>,
    pub size: (f64, f64),
    pub visible: bool,
    /// A press started on the face, so motion and release belong to it.
    pub face_pressed: bool,
    /// Bumped whenever the scheduled transition tick is superseded.
    pub tick_generation: u64,
    pub scheduled_tick: Option<Instant>,
    pub drawing_area: gtk::DrawingArea,
    pub root: gtk::ApplicationWindow,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    SetTime(TimeText),
    Resize(f64, f64),
    Press(Point),
    Motion(Point),
    Release(Point),
    Leave,
    Tick(u64),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::SetTime(t) => AppMsg::SetTime(t),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

/// One line per event on stdout, for scripts driving the picker.
fn report(event: &PickerEvent) {
    log::info!("{:?}", event);
    match event {
        PickerEvent::HourChanged(h) => println!("hour {}", h),
        PickerEvent::MinuteChanged(m) => println!("minute {}", m),
        PickerEvent::TimeChanged(t) => println!("time {}", t),
        PickerEvent::QuantumChanged(q) => println!("quantum {}", q),
        PickerEvent::FocusChanged(f) => println!("focus {}", f),
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Picker, Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Clockpick"),
            #[watch]
            set_visible: model.visible,
            add_css_class: "clockpick-window",
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Hide);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "clockpick-drawing-area",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width as f64, height as f64));
                },

                add_controller = gtk::EventControllerMotion {
                    connect_leave[sender] => move |_| {
                        sender.input(AppMsg::Leave);
                    }
                },

                // mouse and touch alike
                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |_, x, y| {
                        sender.input(AppMsg::Press(Point::new(x, y)));
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::Motion(Point::new(x + dx, y + dy)));
                        }
                    },
                    connect_drag_end[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::Release(Point::new(x + dx, y + dy)));
                        }
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (picker, config, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root);

        let visible = picker.is_focused();
        let model = AppModel {
            picker: Rc::new(RefCell::new(picker)),
            layout: Rc::new(RefCell::new(None)),
            placement: config.window.placement,
            anchor: None,
            size: (0.0, 0.0),
            visible,
            face_pressed: false,
            tick_generation: 0,
            scheduled_tick: None,
            drawing_area: gtk::DrawingArea::default(),
            root: root.clone(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let picker_draw = model.picker.clone();
        let layout_draw = model.layout.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let picker = picker_draw.borrow();
                let style_context = drawing_area.style_context();
                let colors =
                    ThemeColors::from_context(&style_context, picker.options().color_palette);
                if let Some(layout) = layout_draw.borrow().as_ref()
                    && let Err(e) = clock::draw(cr, &picker, layout, &colors)
                {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.set_visible(visible);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        let now = Instant::now();
        let events = match msg {
            AppMsg::Show => {
                self.anchor = match self.placement {
                    Placement::Cursor => window::get_cursor_position(&self.root),
                    Placement::Center => None,
                };
                self.picker.borrow_mut().focus()
            }
            AppMsg::Hide => self.picker.borrow_mut().clear_focus(),
            AppMsg::SetTime(time) => {
                self.picker.borrow_mut().set_time(time);
                Vec::new()
            }
            AppMsg::Resize(width, height) => {
                self.size = (width, height);
                Vec::new()
            }
            AppMsg::Press(p) => self.press(p, now),
            AppMsg::Motion(p) => self.face_input(p, PointerInput::Motion, now),
            AppMsg::Release(p) => {
                let events = self.face_input(p, PointerInput::Release, now);
                self.face_pressed = false;
                events
            }
            AppMsg::Leave => {
                if std::mem::take(&mut self.face_pressed) {
                    self.picker.borrow_mut().pointer(PointerInput::Leave, now)
                } else {
                    Vec::new()
                }
            }
            AppMsg::Tick(generation) => {
                if generation != self.tick_generation {
                    return;
                }
                self.scheduled_tick = None;
                self.picker.borrow_mut().poll(now)
            }
            AppMsg::ConfigReload => {
                self.reload_config();
                Vec::new()
            }
        };

        events.iter().for_each(report);
        self.schedule_tick(now, &sender);
        self.visible = self.picker.borrow().is_focused();
        self.relayout();
        self.drawing_area.queue_draw();
    }
}

impl AppModel {
    fn press(&mut self, p: Point, now: Instant) -> Vec<PickerEvent> {
        let target = match self.layout.borrow().as_ref() {
            Some(layout) => layout.target(p),
            None => return Vec::new(),
        };

        let mut picker = self.picker.borrow_mut();
        match target {
            Target::Face(at) => {
                self.face_pressed = true;
                picker.pointer(PointerInput::Press(at), now)
            }
            Target::HourLabel => picker.select_step(Step::Hour),
            Target::MinuteLabel => picker.select_step(Step::Minute),
            Target::QuantumLabel => picker.toggle_quantum(),
            Target::Classic(index) => picker.choose(index),
            Target::CloseButton | Target::Outside => picker.clear_focus(),
            Target::Panel => Vec::new(),
        }
    }

    /// Motion and release keep reaching the face after the pointer leaves it.
    fn face_input(
        &mut self,
        p: Point,
        input: fn(Point) -> PointerInput,
        now: Instant,
    ) -> Vec<PickerEvent> {
        if !self.face_pressed {
            return Vec::new();
        }
        let at = match self.layout.borrow().as_ref() {
            Some(layout) => layout.to_face(p),
            None => return Vec::new(),
        };
        self.picker.borrow_mut().pointer(input(at), now)
    }

    /// Timeouts are never removed; a stale one sees an old generation and does nothing.
    fn schedule_tick(&mut self, now: Instant, sender: &ComponentSender<Self>) {
        let due = self.picker.borrow().transition_due();
        if due == self.scheduled_tick {
            return;
        }

        self.tick_generation = self.tick_generation.wrapping_add(1);
        self.scheduled_tick = due;

        if let Some(due) = due {
            let generation = self.tick_generation;
            let sender = sender.clone();
            glib::timeout_add_local_once(due.saturating_duration_since(now), move || {
                sender.input(AppMsg::Tick(generation));
            });
        }
    }

    fn relayout(&mut self) {
        let picker = self.picker.borrow();
        let Some(panel) = picker.panel() else {
            self.face_pressed = false;
            *self.layout.borrow_mut() = None;
            return;
        };

        let (width, height) = self.size;
        let center = self
            .anchor
            .unwrap_or(Point::new(width / 2.0, height / 2.0));
        *self.layout.borrow_mut() = Some(Layout::within(
            center,
            PanelKind::of(panel),
            width,
            height,
        ));
    }

    /// The time picked so far survives a reload unless the file sets one.
    fn reload_config(&mut self) {
        match config::load_config() {
            Ok(new_config) => {
                let mut picker = self.picker.borrow_mut();
                let mut options = new_config.picker;
                if options.time.is_none() {
                    options.time = picker.options().time.clone();
                }
                picker.set_options(options);
                self.placement = new_config.window.placement;
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Failed to reload config: {}", e),
        }
    }
}
