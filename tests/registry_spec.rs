use mergington_activities::models::Activity;
use mergington_activities::registry::{ActivityRegistry, RegistryError};
use speculate2::speculate;

fn small_catalog() -> Vec<(String, Activity)> {
    vec![(
        "Robotics Club".to_string(),
        Activity {
            description: "Build and program robots".to_string(),
            schedule: "Fridays, 4:00 PM - 5:30 PM".to_string(),
            max_participants: 8,
            participants: vec!["ada@mergington.edu".to_string()],
        },
    )]
}

speculate! {
    before {
        let registry = ActivityRegistry::with_default_catalog();
    }

    describe "list_activities" {
        it "returns the seeded catalogue" {
            let activities = registry.list_activities();

            assert!(activities.contains_key("Chess Club"));
            assert!(activities.contains_key("Programming Class"));
            assert!(activities.contains_key("Math Olympiad"));
            assert!(activities.contains_key("Science Club"));
        }

        it "is a snapshot unaffected by later reads" {
            let first = registry.list_activities();
            let second = registry.list_activities();
            assert_eq!(first, second);
        }
    }

    describe "signup" {
        it "adds the email to the activity's participants" {
            registry.signup("Chess Club", "new@mergington.edu").expect("signup failed");

            let activities = registry.list_activities();
            assert!(activities["Chess Club"].participants.contains(&"new@mergington.edu".to_string()));
        }

        it "appends after the seeded participants" {
            registry.signup("Art Club", "late@mergington.edu").expect("signup failed");

            let activities = registry.list_activities();
            assert_eq!(activities["Art Club"].participants.last().map(String::as_str), Some("late@mergington.edu"));
        }

        it "rejects a duplicate email and grows the list by exactly one" {
            let before = registry.list_activities()["Chess Club"].participants.len();

            registry.signup("Chess Club", "dup@mergington.edu").expect("first signup failed");
            let result = registry.signup("Chess Club", "dup@mergington.edu");

            assert_eq!(result, Err(RegistryError::AlreadySignedUp));
            let after = registry.list_activities()["Chess Club"].participants.len();
            assert_eq!(after, before + 1);
        }

        it "rejects a seeded participant" {
            let result = registry.signup("Chess Club", "michael@mergington.edu");
            assert_eq!(result, Err(RegistryError::AlreadySignedUp));
        }

        it "returns NotFound for an unknown activity and leaves the registry unchanged" {
            let before = registry.list_activities();

            let result = registry.signup("NoSuchClub", "a@mergington.edu");

            assert_eq!(result, Err(RegistryError::ActivityNotFound));
            assert_eq!(registry.list_activities(), before);
        }

        it "does not enforce max_participants" {
            // Math Olympiad seeds 1 participant with a capacity of 10
            for i in 0..12 {
                registry
                    .signup("Math Olympiad", &format!("student{}@mergington.edu", i))
                    .expect("signup past capacity failed");
            }

            let activities = registry.list_activities();
            assert_eq!(activities["Math Olympiad"].participants.len(), 13);
        }
    }

    describe "unregister" {
        it "removes exactly the target email" {
            registry.signup("Science Club", "gone@mergington.edu").expect("signup failed");
            let before = registry.list_activities()["Science Club"].participants.len();

            registry.unregister("Science Club", "gone@mergington.edu").expect("unregister failed");

            let activities = registry.list_activities();
            assert_eq!(activities["Science Club"].participants.len(), before - 1);
            assert!(!activities["Science Club"].participants.contains(&"gone@mergington.edu".to_string()));
        }

        it "fails the second time for the same pair" {
            registry.signup("Science Club", "once@mergington.edu").expect("signup failed");
            registry.unregister("Science Club", "once@mergington.edu").expect("unregister failed");

            let result = registry.unregister("Science Club", "once@mergington.edu");
            assert_eq!(result, Err(RegistryError::NotSignedUp));
        }

        it "rejects an email that never signed up" {
            let result = registry.unregister("Science Club", "stranger@mergington.edu");
            assert_eq!(result, Err(RegistryError::NotSignedUp));
        }

        it "returns NotFound for an unknown activity and leaves the registry unchanged" {
            let before = registry.list_activities();

            let result = registry.unregister("NoSuchClub", "a@mergington.edu");

            assert_eq!(result, Err(RegistryError::ActivityNotFound));
            assert_eq!(registry.list_activities(), before);
        }

        it "round-trips with signup back to the original roster" {
            let before = registry.list_activities();

            registry.signup("Drama Club", "transient@mergington.edu").expect("signup failed");
            registry.unregister("Drama Club", "transient@mergington.edu").expect("unregister failed");

            assert_eq!(registry.list_activities(), before);
        }
    }

    describe "custom catalogues" {
        it "builds isolated registries from an explicit seed" {
            let custom = ActivityRegistry::new(small_catalog());
            let activities = custom.list_activities();

            assert_eq!(activities.len(), 1);
            assert_eq!(activities["Robotics Club"].max_participants, 8);

            // The default catalogue is untouched by the custom instance
            assert!(!registry.list_activities().contains_key("Robotics Club"));
        }

        it "shares state across cloned handles" {
            let handle = registry.clone();

            handle.signup("Gym Class", "grace@mergington.edu").expect("signup failed");

            assert!(registry.list_activities()["Gym Class"]
                .participants
                .contains(&"grace@mergington.edu".to_string()));
        }
    }
}
