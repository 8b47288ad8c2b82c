// Rust guideline compliant 2026-10-15

//! Tests for the listing query service.

use tennisfinder_app::{
    Anonymous, ErrorCode, ListingManager, ListingQueries, ManualClock, NewUser, UserDirectory,
};
use tennisfinder_core::{Config, ListingInput, MemoryStore, RecordId, Role, UserId};

fn input(title: &str) -> ListingInput {
    ListingInput {
        title: title.to_string(),
        description: "desc".to_string(),
        category: "shoes".to_string(),
        condition: "used".to_string(),
        brand: "Asics".to_string(),
        model: "Gel Resolution".to_string(),
        flaw: "none".to_string(),
        age_months: 3,
        original_price: 150.0,
        user_price: 90.0,
        images: Vec::new(),
    }
}

struct Fixture {
    store: MemoryStore,
    clock: ManualClock,
    manager: ListingManager<MemoryStore, ManualClock>,
}

impl Fixture {
    fn new() -> Self {
        let store = MemoryStore::new();
        let clock = ManualClock::new(1_000);
        let manager = ListingManager::with_clock(store.clone(), clock.clone());
        Self {
            store,
            clock,
            manager,
        }
    }

    fn queries(&self, config: &Config) -> ListingQueries<MemoryStore> {
        ListingQueries::new(self.store.clone(), config)
    }

    fn register(&self, email: &str, role: Role) -> UserId {
        let users =
            UserDirectory::with_clock(self.store.clone(), &Config::default(), self.clock.clone());
        users
            .register(&NewUser {
                email: email.to_string(),
                role: Some(role),
                ..NewUser::default()
            })
            .expect("register")
            .id
    }
}

#[test]
fn test_list_mine_returns_newest_first() {
    let fixture = Fixture::new();
    let u = UserId::new("usr_u");

    let older = fixture.manager.create(&u, &input("t1")).expect("create");
    fixture.clock.advance(5_000);
    let newer = fixture.manager.create(&u, &input("t2")).expect("create");

    let mine = fixture.queries(&Config::default()).list_mine(&u).expect("list");
    let ids: Vec<RecordId> = mine.into_iter().map(|listing| listing.id).collect();
    assert_eq!(ids, vec![newer, older]);
}

#[test]
fn test_equal_timestamps_break_ties_by_insertion() {
    let fixture = Fixture::new();
    let u = UserId::new("usr_u");

    let first = fixture.manager.create(&u, &input("a")).expect("create");
    let second = fixture.manager.create(&u, &input("b")).expect("create");

    let available = fixture
        .queries(&Config::default())
        .list_available()
        .expect("list");
    assert_eq!(available[0].id, second);
    assert_eq!(available[1].id, first);
}

#[test]
fn test_list_mine_excludes_other_owners() {
    let fixture = Fixture::new();
    let u = UserId::new("usr_u");
    let v = UserId::new("usr_v");
    fixture.manager.create(&u, &input("mine")).expect("create");
    fixture.manager.create(&v, &input("theirs")).expect("create");

    let mine = fixture.queries(&Config::default()).list_mine(&u).expect("list");
    assert_eq!(mine.len(), 1);
    assert!(mine.iter().all(|listing| listing.owner_id == u));
}

#[test]
fn test_list_mine_requires_caller() {
    let fixture = Fixture::new();
    let err = fixture
        .queries(&Config::default())
        .list_mine(&Anonymous)
        .expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Unauthenticated);
}

#[test]
fn test_list_available_needs_no_caller_and_skips_sold() {
    let fixture = Fixture::new();
    let u = UserId::new("usr_u");
    let sold = fixture.manager.create(&u, &input("sold")).expect("create");
    let open = fixture.manager.create(&u, &input("open")).expect("create");
    fixture.manager.toggle_status(&u, &sold).expect("toggle");

    let available = fixture
        .queries(&Config::default())
        .list_available()
        .expect("list");
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, open);
}

#[test]
fn test_get_by_id_absent_for_unknown_and_malformed_ids() {
    let fixture = Fixture::new();
    let queries = fixture.queries(&Config::default());

    assert!(queries
        .get_by_id(&RecordId::new("lst_ffffffffffffffff"))
        .expect("lookup")
        .is_none());
    assert!(queries
        .get_by_id(&RecordId::new("not an id at all"))
        .expect("lookup")
        .is_none());
}

#[test]
fn test_list_all_is_admin_only_by_default() {
    let fixture = Fixture::new();
    let admin = fixture.register("admin@example.com", Role::Admin);
    let player = fixture.register("player@example.com", Role::Player);
    fixture.manager.create(&player, &input("a")).expect("create");
    let sold = fixture.manager.create(&player, &input("b")).expect("create");
    fixture.manager.toggle_status(&player, &sold).expect("toggle");
    let queries = fixture.queries(&Config::default());

    let anonymous = queries.list_all(&Anonymous).expect_err("must fail");
    assert_eq!(anonymous.code(), ErrorCode::Unauthenticated);

    let non_admin = queries.list_all(&player).expect_err("must fail");
    assert_eq!(non_admin.code(), ErrorCode::Forbidden);

    let unknown = queries
        .list_all(&UserId::new("usr_nobody"))
        .expect_err("must fail");
    assert_eq!(unknown.code(), ErrorCode::Forbidden);

    let all = queries.list_all(&admin).expect("admin list");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, sold);
}

#[test]
fn test_list_all_open_when_gate_disabled() {
    let fixture = Fixture::new();
    let u = UserId::new("usr_u");
    fixture.manager.create(&u, &input("a")).expect("create");
    let config = Config {
        list_all_requires_admin: false,
        ..Config::default()
    };

    let all = fixture.queries(&config).list_all(&Anonymous).expect("list");
    assert_eq!(all.len(), 1);
}
