use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::sound::MediaCue;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::wheel;
use crate::gui::window;
use fortune_core::color::SliceColors;
use fortune_core::spin::{StartOutcome, Tick};
use fortune_core::{Name, Wheel};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub struct AppModel {
    pub wheel: Rc<RefCell<Wheel>>,
    pub colors: Rc<RefCell<SliceColors>>,
    pub config_path: PathBuf,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
    pub name_entry: gtk::Entry,
    pub custom_list: gtk::ListBox,
}

pub struct AppInit {
    pub wheel: Wheel,
    pub colors: SliceColors,
    pub config: Config,
    pub config_path: PathBuf,
    pub events: async_channel::Receiver<AppEvent>,
}

#[derive(Debug)]
pub enum AppMsg {
    SubmitName,
    Toggle(Name, bool),
    Spin,
    Landed(Name),
    Acknowledge(Name),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Fortune"),
            set_resizable: false,

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 12,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_content_width: size,
                    set_content_height: size,
                    set_halign: gtk::Align::Center,
                    add_css_class: "fortune-wheel",
                },

                gtk::Button {
                    set_label: "Spin",
                    add_css_class: "suggested-action",
                    connect_clicked => AppMsg::Spin,
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 6,

                    #[name = "name_entry"]
                    gtk::Entry {
                        set_hexpand: true,
                        set_placeholder_text: Some("Add a name"),
                        connect_activate => AppMsg::SubmitName,
                    },

                    gtk::Button {
                        set_label: "Add",
                        connect_clicked => AppMsg::SubmitName,
                    },
                },

                gtk::ScrolledWindow {
                    set_min_content_height: 120,
                    set_vexpand: true,

                    #[name = "custom_list"]
                    gtk::ListBox {
                        set_selection_mode: gtk::SelectionMode::None,
                        add_css_class: "fortune-names",
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            wheel: session,
            colors,
            config,
            config_path,
            events,
        } = init;

        theme::load_css();

        let layout = config.wheel;
        let size = layout.size.round() as i32;

        let session = match config.sound.as_deref().and_then(MediaCue::open) {
            Some(cue) => session.with_cue(Box::new(cue)),
            None => session,
        };

        let model = AppModel {
            wheel: Rc::new(RefCell::new(session)),
            colors: Rc::new(RefCell::new(colors)),
            config_path,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
            name_entry: gtk::Entry::default(),
            custom_list: gtk::ListBox::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.name_entry = widgets.name_entry.clone();
        model.custom_list = widgets.custom_list.clone();

        let wheel_draw = model.wheel.clone();
        let colors_draw = model.colors.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                #[allow(deprecated)]
                let theme = ThemeColors::from_context(&drawing_area.style_context());
                let result = wheel::draw(
                    cr,
                    &layout,
                    &wheel_draw.borrow(),
                    &mut colors_draw.borrow_mut(),
                    &theme,
                );
                if let Err(e) = result {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        model.refresh_custom_list(&sender);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::SubmitName => {
                let input = self.name_entry.text();
                let result = self.wheel.borrow_mut().add_name(&input);
                match result {
                    Ok(name) => {
                        log::info!("Added '{}'", name);
                        self.name_entry.set_text("");
                        self.refresh_custom_list(&sender);
                        self.drawing_area.queue_draw();
                    }
                    Err(e) => log::debug!("Ignoring name input: {}", e),
                }
            }
            AppMsg::Toggle(name, active) => {
                let found = self.wheel.borrow_mut().set_active(&name, active);
                if found {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Spin => {
                let result = self.wheel.borrow_mut().spin(window::now());
                match result {
                    Ok(StartOutcome::Started) => self.animate(&sender),
                    Ok(StartOutcome::AlreadySpinning) => {}
                    Err(e) => window::show_notice(&self.root, &e.to_string()),
                }
            }
            AppMsg::Landed(name) => {
                let sender = sender.clone();
                let winner = name.clone();
                window::confirm_winner(&self.root, &name, move || {
                    sender.input(AppMsg::Acknowledge(winner));
                });
            }
            AppMsg::Acknowledge(name) => {
                let removed = self.wheel.borrow_mut().acknowledge(&name);
                if removed {
                    self.refresh_custom_list(&sender);
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    {
                        let mut wheel = self.wheel.borrow_mut();
                        wheel.replace_fixed(new_config.names);
                        wheel.set_params(new_config.spin);
                    }
                    self.colors.borrow_mut().set_mode(new_config.colors);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    /// Drives the spin from the frame clock until it lands.
    fn animate(&self, sender: &ComponentSender<Self>) {
        let wheel = self.wheel.clone();
        let sender = sender.clone();
        self.drawing_area
            .add_tick_callback(move |drawing_area, clock| {
                let tick = wheel.borrow_mut().tick(window::frame_time(clock));
                drawing_area.queue_draw();
                match tick {
                    Tick::Spinning => glib::ControlFlow::Continue,
                    Tick::Stopped(Some(landing)) => {
                        sender.input(AppMsg::Landed(landing.name));
                        glib::ControlFlow::Break
                    }
                    Tick::Stopped(None) | Tick::Idle => glib::ControlFlow::Break,
                }
            });
    }

    fn refresh_custom_list(&self, sender: &ComponentSender<Self>) {
        while let Some(row) = self.custom_list.first_child() {
            self.custom_list.remove(&row);
        }

        for entry in self.wheel.borrow().custom() {
            let check = gtk::CheckButton::with_label(entry.name.as_str());
            check.set_active(entry.active);

            let sender = sender.clone();
            let name = entry.name.clone();
            check.connect_toggled(move |check| {
                sender.input(AppMsg::Toggle(name.clone(), check.is_active()));
            });
            self.custom_list.append(&check);
        }
    }
}
