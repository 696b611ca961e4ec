//! End-to-end interaction sequences against the controller

use masthead_core::{
    Behavior, Interaction, NavCatalog, NavConfig, NavEvent, NavLabel, NavSnapshot,
    NavigationController, ThemeMode, parse_script,
};

fn state(
    scrolled: bool,
    open_dropdown: Option<&str>,
    mobile_menu_open: bool,
    active_mobile_panel: Option<&str>,
) -> NavSnapshot {
    NavSnapshot {
        scrolled,
        open_dropdown: open_dropdown.map(NavLabel::from),
        mobile_menu_open,
        active_mobile_panel: active_mobile_panel.map(NavLabel::from),
        theme: ThemeMode::from_scrolled(scrolled),
    }
}

fn controller(back_clears_dropdown: bool) -> NavigationController {
    NavigationController::new(
        NavCatalog::from(&NavConfig::default()),
        Behavior {
            back_clears_dropdown,
        },
    )
}

#[test]
fn test_drawer_walkthrough_retaining_dropdown_on_back() {
    let nav = controller(false);
    assert_eq!(nav.snapshot(), state(false, None, false, None));

    nav.set_scrolled(120.0);
    assert_eq!(nav.snapshot(), state(true, None, false, None));

    nav.toggle_mobile_menu();
    assert_eq!(nav.snapshot(), state(true, None, true, None));

    nav.open_mobile_panel("Domains");
    assert_eq!(
        nav.snapshot(),
        state(true, Some("Domains"), true, Some("Domains"))
    );

    nav.close_mobile_panel();
    assert_eq!(nav.snapshot(), state(true, Some("Domains"), true, None));

    nav.toggle_mobile_menu();
    assert_eq!(nav.snapshot(), state(true, None, false, None));
}

#[test]
fn test_drawer_walkthrough_with_default_back_policy() {
    let nav = controller(true);
    nav.set_scrolled(120.0);
    nav.toggle_mobile_menu();
    nav.open_mobile_panel("Domains");

    nav.close_mobile_panel();
    assert_eq!(nav.snapshot(), state(true, None, true, None));

    nav.toggle_mobile_menu();
    assert_eq!(nav.snapshot(), state(true, None, false, None));
}

#[test]
fn test_mutual_exclusion_across_sections() {
    let nav = NavigationController::default();
    nav.toggle_dropdown("Marketing");
    nav.toggle_dropdown("Sign In");
    let snap = nav.snapshot();
    assert!(snap.is_dropdown_open("Sign In"));
    assert!(!snap.is_dropdown_open("Marketing"));
}

#[test]
fn test_events_follow_state_changes() {
    let nav = NavigationController::default();
    let mut events = nav.subscribe();

    nav.set_scrolled(40.0);
    nav.set_scrolled(80.0);
    nav.toggle_mobile_menu();
    nav.open_mobile_panel("Security");
    nav.toggle_mobile_menu();

    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }

    assert_eq!(
        received,
        vec![
            NavEvent::ScrollChanged {
                scrolled: true,
                theme: ThemeMode::Dark
            },
            NavEvent::MobileMenuChanged(true),
            NavEvent::DropdownChanged(Some(NavLabel::from("Security"))),
            NavEvent::MobilePanelChanged(Some(NavLabel::from("Security"))),
            NavEvent::DropdownChanged(None),
            NavEvent::MobileMenuChanged(false),
            NavEvent::MobilePanelChanged(None),
        ]
    );
}

#[test]
fn test_replayed_script_matches_direct_calls() {
    let script = "\
        # desktop dropdowns
        toggle Domains
        toggle Security
        outside
        # mobile
        menu
        panel Sign In
        back
        scroll 12
    ";
    let nav = NavigationController::default();
    for interaction in parse_script(script).unwrap() {
        nav.dispatch(interaction);
    }
    assert_eq!(nav.snapshot(), state(true, None, true, None));
}

#[test]
fn test_out_of_contract_calls_do_not_publish() {
    let nav = NavigationController::default();
    let mut events = nav.subscribe();

    assert!(!nav.dispatch(Interaction::OpenMobilePanel("Domains".to_string())));
    assert!(!nav.dispatch(Interaction::ToggleDropdown("Email".to_string())));
    assert!(!nav.dispatch(Interaction::MobileBack));
    assert!(!nav.dispatch(Interaction::CloseDropdown));

    assert!(events.try_recv().is_err());
    assert_eq!(nav.snapshot(), NavSnapshot::default());
}
