//! Events available when a session starts.

use chrono::{DateTime, Duration, Utc};

use crate::event::{Event, EventId, NewEvent};
use crate::image::ImageRef;
use crate::store::EventStore;

struct Seed {
    name: &'static str,
    description: &'static str,
    days_out: i64,
    image: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "College Fest 2025",
        description: "Join us for a one-of-a-kind music and arts festival that promises to \
            electrify your senses! Featuring top-tier artists, stunning visual performances, \
            and a vibrant atmosphere, College Fest is where music meets creativity. Don't miss \
            out on the ultimate celebration of sound and color!",
        days_out: 90,
        image: "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?auto=format&fit=crop&q=80",
    },
    Seed {
        name: "TechSummit 2024",
        description: "The future of technology is here! TechSummit brings together innovators, \
            entrepreneurs, and experts from around the world for a day full of cutting-edge \
            insights, workshops, and networking opportunities. Whether you're a startup \
            enthusiast or a tech veteran, this event is your gateway to the latest trends in \
            the industry.",
        days_out: 120,
        image: "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?auto=format&fit=crop&q=80",
    },
    Seed {
        name: "Get Together",
        description: "Dress to impress and celebrate an unforgettable night of elegance, \
            glamour, and entertainment. The Get Together brings together celebrities, \
            philanthropists, and influencers for an evening filled with live performances, fine \
            dining, and a red-carpet experience. A night to remember, supporting great causes \
            and unforgettable moments!",
        days_out: 150,
        image: "https://images.unsplash.com/photo-1519671482749-fd09be7ccebf?auto=format&fit=crop&q=80",
    },
];

/// The default events, dated relative to `now`.
pub fn default_events(now: DateTime<Utc>) -> Vec<Event> {
    SEEDS
        .iter()
        .zip(1..)
        .map(|(seed, id)| {
            let fields = NewEvent {
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                date: now + Duration::days(seed.days_out),
                image: ImageRef::remote(seed.image).unwrap_or(ImageRef::Placeholder),
            };
            Event::new(EventId(id), fields, now)
        })
        .collect()
}

impl EventStore {
    /// A store holding the default events.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        EventStore::with_events(default_events(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn three_future_events_with_remote_images() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let events = default_events(now);

        assert_eq!(events.len(), 3);
        let ids: Vec<_> = events.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(events[0].name, "College Fest 2025");
        assert_eq!(events[0].date, now + Duration::days(90));
        assert_eq!(events[2].date, now + Duration::days(150));
        assert!(events.iter().all(|e| matches!(e.image, ImageRef::Remote(_))));
        assert!(events.iter().all(|e| e.created_at == now));
    }

    #[test]
    fn seeded_store_continues_numbering() {
        let now = Utc::now();
        let store = EventStore::seeded(now);
        assert_eq!(store.len(), 3);
        assert_eq!(store.first().map(|e| e.name.as_str()), Some("College Fest 2025"));
    }
}
