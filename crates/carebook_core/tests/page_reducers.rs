use carebook_core::page::settings::{Department, NotificationKind, ProfileField, Theme};
use carebook_core::{
    replay, service_filter_label, Author, CalendarEvent, CalendarPage, Choice,
    ClientDirectoryPage, ClientEvent, ClientFilter, ClientStats, DataSource, DateFormat,
    Direction, Intent, MessagesEvent, MessagesPage, NoteFilter, NotePriority, NotesEvent,
    NotesPage, Reducer, SeedData, Selection, SelectionEvent, SelectionPhase, ServiceType,
    SettingsEvent, SettingsPage, SettingsSection, StaffDirectoryPage, StaffEvent, StaffRole,
    StaffStats, TimeFormat, WindowKind,
};
use chrono::{NaiveDate, NaiveDateTime};

fn seed() -> SeedData {
    SeedData::embedded().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

#[test]
fn selection_switches_directly_and_close_keeps_stale_entity() {
    let selection = Selection::default().reduce(SelectionEvent::Select("A"));
    assert_eq!(selection.selected(), Some(&"A"));
    assert!(selection.is_visible());

    let selection = selection.reduce(SelectionEvent::Select("B"));
    assert_eq!(selection.selected(), Some(&"B"));
    assert!(selection.is_visible());
    assert_eq!(selection.phase(), SelectionPhase::Viewing(&"B"));

    let selection = selection.reduce(SelectionEvent::Close);
    assert!(!selection.is_visible());
    assert_eq!(selection.selected(), Some(&"B"));
    assert_eq!(selection.phase(), SelectionPhase::Idle);
    assert!(selection.detail().is_none());
}

#[test]
fn calendar_page_navigates_and_buckets_seed_week() {
    let seed = seed();
    let page = CalendarPage::new(date(2024, 6, 12));
    let view = page.view(seed.appointments(), date(2024, 6, 12));
    assert_eq!(view.period_label, "Jun 9 - Jun 15, 2024");
    assert_eq!(view.total, 3);
    assert_eq!(view.days[3].appointments.len(), 2);
    assert!(view.days[3].is_today);

    let page = replay(
        page,
        [
            CalendarEvent::Navigate(Direction::Next),
            CalendarEvent::Navigate(Direction::Next),
        ],
    );
    assert_eq!(page.window().anchor(), date(2024, 6, 26));
    assert_eq!(page.view(seed.appointments(), date(2024, 6, 12)).total, 0);

    let page = page
        .reduce(CalendarEvent::SetView(WindowKind::Month))
        .reduce(CalendarEvent::Today(date(2024, 6, 12)));
    let view = page.view(seed.appointments(), date(2024, 6, 12));
    assert_eq!(view.period_label, "June 2024");
    assert_eq!(view.total, 3);
    assert_eq!(view.days.len(), 30);
    assert_eq!(view.listing.len(), 3);
}

#[test]
fn calendar_modal_holds_notes_and_records_intents() {
    let seed = seed();
    let page = CalendarPage::new(date(2024, 6, 12))
        .reduce(CalendarEvent::ConfirmAppointment)
        .reduce(CalendarEvent::EditNotes("ignored".to_string()));
    assert!(page.last_intent().is_none());
    assert_eq!(page.notes_draft(), "");

    let page = page
        .open_by_id(seed.appointments(), "missing")
        .open_by_id(seed.appointments(), "2");
    assert_eq!(page.selection().detail().map(|a| a.id.as_str()), Some("2"));

    let page = page
        .reduce(CalendarEvent::EditNotes("Bring activity kit".to_string()))
        .reduce(CalendarEvent::ConfirmAppointment);
    assert_eq!(page.notes_draft(), "Bring activity kit");
    assert_eq!(
        page.last_intent(),
        Some(&Intent::ConfirmAppointment("2".to_string()))
    );

    let page = page
        .reduce(CalendarEvent::CloseAppointment)
        .reduce(CalendarEvent::SendInvite);
    assert_eq!(
        page.last_intent(),
        Some(&Intent::ConfirmAppointment("2".to_string()))
    );
    assert_eq!(page.selection().selected().map(|a| a.id.as_str()), Some("2"));
}

#[test]
fn staff_page_filters_clears_and_contacts() {
    let seed = seed();
    let page = replay(
        StaffDirectoryPage::default(),
        [
            StaffEvent::Search("CHEN".to_string()),
            StaffEvent::FilterRole(Choice::Only(StaffRole::Babysitter)),
        ],
    );
    assert!(page.has_active_filters());
    let view = page.view(seed.staff());
    assert_eq!(view.len(), 1);
    assert_eq!(view.items[0].name, "Emily Chen");
    assert_eq!(view.summary("staff members"), "Showing 1 of 6 staff members");

    let emily = view.items[0].clone();
    let page = page
        .reduce(StaffEvent::ClearFilters)
        .reduce(StaffEvent::Contact(emily));
    assert!(!page.has_active_filters());
    assert_eq!(page.view(seed.staff()).len(), 6);
    assert_eq!(page.last_intent(), Some(&Intent::ContactStaff("2".to_string())));

    let page = page.open_by_id(seed.staff(), "nope");
    assert!(page.selection().detail().is_none());

    let stats = StaffStats::collect(seed.staff());
    assert_eq!((stats.total, stats.active, stats.on_leave), (6, 5, 1));
}

#[test]
fn client_page_combines_search_with_service_filter() {
    let seed = seed();
    let page = ClientDirectoryPage::default()
        .reduce(ClientEvent::FilterService(Choice::Only(ServiceType::VisitingAngels)))
        .reduce(ClientEvent::Search("street".to_string()));
    let names: Vec<&str> = page
        .view(seed.clients())
        .items
        .iter()
        .map(|client| client.name.as_str())
        .collect();
    assert_eq!(names, vec!["Margaret Johnson", "Robert Davis", "George Anderson"]);

    let thompson = seed.find_client("2").unwrap().clone();
    let page = page
        .reduce(ClientEvent::Open(thompson.clone()))
        .reduce(ClientEvent::Schedule(thompson));
    assert_eq!(page.selection().detail().map(|c| c.id.as_str()), Some("2"));
    assert_eq!(page.last_intent(), Some(&Intent::ScheduleVisit("2".to_string())));

    let stats = ClientStats::collect(seed.clients());
    assert_eq!(
        (stats.total, stats.visiting_angels, stats.babysitting_angels),
        (6, 4, 2)
    );
}

#[test]
fn notes_page_prepends_non_blank_drafts_and_resets_compose_box() {
    let seed = seed();
    let page = NotesPage::new(seed.notes().to_vec(), Author::current_user());

    let page = page
        .reduce(NotesEvent::EditDraft("   ".to_string()))
        .reduce(NotesEvent::Submit { at: at(2024, 6, 12, 10) });
    assert_eq!(page.notes().len(), 4);
    assert!(page.last_intent().is_none());

    let page = replay(
        page,
        [
            NotesEvent::EditDraft("Pick up prescription".to_string()),
            NotesEvent::SetDraftPriority(NotePriority::High),
            NotesEvent::Submit { at: at(2024, 6, 12, 10) },
        ],
    );
    assert_eq!(page.notes().len(), 5);
    let newest = &page.notes()[0];
    assert_eq!(newest.content, "Pick up prescription");
    assert_eq!(newest.priority, NotePriority::High);
    assert_eq!(newest.author.name, "Current User");
    assert_eq!(page.draft(), "");
    assert_eq!(page.draft_priority(), NotePriority::Medium);
    assert!(!page.can_submit());
    assert_eq!(page.last_intent(), Some(&Intent::NoteAdded(newest.id.clone())));

    let page = page.reduce(NotesEvent::FilterPriority(Choice::Only(NotePriority::High)));
    let visible: Vec<&str> = page.visible().iter().map(|note| note.id.as_str()).collect();
    assert_eq!(visible.len(), 3);
    assert_eq!(visible[1..], ["1", "4"]);
}

#[test]
fn messages_page_searches_selects_and_sends() {
    let seed = seed();
    let page = MessagesPage::new(seed.conversations(), seed.messages().to_vec(), "Dr. Sarah Wilson");
    assert_eq!(page.selected_id(), Some("1"));

    let page = page.reduce(MessagesEvent::Search("team".to_string()));
    let visible: Vec<&str> = page
        .visible(seed.conversations())
        .iter()
        .map(|conversation| conversation.name.as_str())
        .collect();
    assert_eq!(visible, vec!["Healthcare Team", "Operations Team"]);

    assert_eq!(page.unread_count(seed.conversations()), 2);

    let page = replay(
        page.select_by_id(seed.conversations(), "3"),
        [
            MessagesEvent::Send { at: at(2024, 6, 12, 11) },
            MessagesEvent::EditDraft("See you at 3".to_string()),
            MessagesEvent::Send { at: at(2024, 6, 12, 11) },
        ],
    );
    assert_eq!(
        page.selected(seed.conversations()).map(|c| c.name.as_str()),
        Some("Operations Team")
    );
    assert_eq!(page.thread().len(), 4);
    let sent = page.thread().last().unwrap();
    assert!(sent.is_own);
    assert_eq!(sent.content, "See you at 3");
    assert_eq!(page.draft(), "");
    assert_eq!(
        page.last_intent(),
        Some(&Intent::MessageSent {
            conversation: "3".to_string()
        })
    );
}

#[test]
fn settings_page_edits_and_saves_sections() {
    let page = SettingsPage::default();
    assert!(page.settings().notifications.is_enabled(NotificationKind::Email));
    assert!(!page.settings().notifications.is_enabled(NotificationKind::Sms));
    assert_eq!(page.settings().preferences.timezone, "America/Toronto");

    let page = replay(
        page,
        [
            SettingsEvent::SetNotification(NotificationKind::Sms, true),
            SettingsEvent::SetTheme(Theme::Dark),
            SettingsEvent::SetDateFormat(DateFormat::Iso),
            SettingsEvent::SetTimeFormat(TimeFormat::TwentyFourHour),
            SettingsEvent::SetDepartment(Department::Clinical),
            SettingsEvent::Save(SettingsSection::Preferences),
        ],
    );
    let settings = page.settings();
    assert!(settings.notifications.is_enabled(NotificationKind::Sms));
    assert_eq!(settings.preferences.theme, Theme::Dark);
    assert_eq!(settings.profile.department, Department::Clinical);
    assert_eq!(
        page.last_intent(),
        Some(&Intent::SettingsSaved(SettingsSection::Preferences))
    );

    let rejected = page
        .reduce(SettingsEvent::EditProfile(ProfileField::Email, "  ".to_string()))
        .reduce(SettingsEvent::Save(SettingsSection::Profile));
    assert_eq!(
        rejected.last_intent(),
        Some(&Intent::SettingsSaved(SettingsSection::Preferences))
    );

    let json = serde_json::to_value(rejected.settings()).unwrap();
    assert_eq!(json["preferences"]["dateFormat"], "yyyy-MM-dd");
    assert_eq!(json["preferences"]["timeFormat"], "24h");
    assert_eq!(json["notifications"]["smsNotifications"], true);
}

#[test]
fn messages_page_ignores_unknown_conversation_ids() {
    let seed = seed();
    let page = MessagesPage::new(seed.conversations(), seed.messages().to_vec(), "Dr. Sarah Wilson")
        .select_by_id(seed.conversations(), "2")
        .select_by_id(seed.conversations(), "ghost");
    assert_eq!(page.selected_id(), Some("2"));

    let page = replay(
        page,
        [
            MessagesEvent::EditDraft("hello".to_string()),
            MessagesEvent::Send { at: at(2024, 6, 12, 11) },
        ],
    );
    assert_eq!(
        page.selected(seed.conversations()).map(|c| c.name.as_str()),
        Some("Emily Chen")
    );
    assert_eq!(
        page.last_intent(),
        Some(&Intent::MessageSent {
            conversation: "2".to_string()
        })
    );
}

#[test]
fn invite_targets_the_assigned_staff_member() {
    let seed = seed();
    let mut appointment = seed.find_appointment("2").unwrap().clone();
    appointment.staff = seed.find_staff("5").unwrap().clone();

    let page = CalendarPage::new(date(2024, 6, 12))
        .reduce(CalendarEvent::OpenAppointment(appointment))
        .reduce(CalendarEvent::SendInvite);
    assert_eq!(page.last_intent(), Some(&Intent::SendInvite("5".to_string())));
}

#[test]
fn filter_chips_label_every_option() {
    let services: Vec<&str> = ClientFilter::service_options()
        .into_iter()
        .map(service_filter_label)
        .collect();
    assert_eq!(services, vec!["All Services", "Visiting Angels", "Babysitting Angels"]);

    let priorities: Vec<String> = NoteFilter::priority_options()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(priorities, vec!["All", "High", "Medium", "Low"]);
}
