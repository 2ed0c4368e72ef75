//! Test the action-dispatch flow without the TUI

mod test_dispatch_flow {
    // Mock the exact same structures as in app.rs and core/effect.rs

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tab {
        Vente,
        Maintenance,
        Camera,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Effect {
        OpenSalesForm,
        OpenMaintenanceDashboard,
        OpenCameraStream,
    }

    fn dispatch(tab: Tab) -> Effect {
        match tab {
            Tab::Vente => Effect::OpenSalesForm,
            Tab::Maintenance => Effect::OpenMaintenanceDashboard,
            Tab::Camera => Effect::OpenCameraStream,
        }
    }

    struct App {
        active_tab: Tab,
        notice: Option<String>,
        camera_endpoint: Option<String>,
    }

    impl App {
        fn new() -> Self {
            Self {
                active_tab: Tab::Vente,
                notice: None,
                camera_endpoint: None,
            }
        }

        fn fulfill(&mut self, effect: Effect) {
            let text = match effect {
                Effect::OpenSalesForm => {
                    "Action Vente: ouvrir l'écran de saisie d'une nouvelle vente.".to_string()
                }
                Effect::OpenMaintenanceDashboard => {
                    "Action Maintenance: ouvrir le tableau de bord de maintenance.".to_string()
                }
                Effect::OpenCameraStream => match self.camera_endpoint.as_deref() {
                    Some(url) => {
                        format!("Action Caméra: flux configuré sur {url} (ouverture non intégrée).")
                    }
                    None => "Action Caméra: pas de caméra configurée. Remplacez par votre flux."
                        .to_string(),
                },
            };
            self.notice = Some(text);
        }
    }

    #[test]
    fn test_action_on_each_tab_opens_its_own_notice() {
        let mut app = App::new();

        let effect = dispatch(app.active_tab);
        assert_eq!(effect, Effect::OpenSalesForm);
        app.fulfill(effect);
        assert_eq!(
            app.notice.as_deref(),
            Some("Action Vente: ouvrir l'écran de saisie d'une nouvelle vente.")
        );

        app.active_tab = Tab::Maintenance;
        let effect = dispatch(app.active_tab);
        assert_eq!(effect, Effect::OpenMaintenanceDashboard);
        app.fulfill(effect);
        assert_eq!(
            app.notice.as_deref(),
            Some("Action Maintenance: ouvrir le tableau de bord de maintenance.")
        );

        println!("✓ Each tab dispatches exactly its own effect!");
    }

    #[test]
    fn test_camera_action_depends_on_configured_endpoint() {
        let mut app = App::new();
        app.active_tab = Tab::Camera;

        app.fulfill(dispatch(app.active_tab));
        assert_eq!(
            app.notice.as_deref(),
            Some("Action Caméra: pas de caméra configurée. Remplacez par votre flux.")
        );

        app.camera_endpoint = Some("http://192.168.1.20:8080".to_string());
        app.fulfill(dispatch(app.active_tab));
        let notice = app.notice.expect("notice should be open");
        assert!(notice.contains("http://192.168.1.20:8080"));

        println!("✓ Camera fulfilment honours the configured endpoint!");
    }

    #[test]
    fn test_notice_is_modal_until_dismissed() {
        let mut app = App::new();
        app.fulfill(dispatch(app.active_tab));
        assert!(app.notice.is_some());

        // Dismissal clears the notice; further input is processed again
        app.notice = None;
        assert!(app.notice.is_none());

        println!("✓ Notice dismissal works as expected!");
    }
}
