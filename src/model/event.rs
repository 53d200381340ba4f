use serde::Serialize;

/// An entry of the fixed event catalog. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub has_registration: bool,
}

pub static EVENTS: [Event; 10] = [
    Event {
        id: "evt1",
        title: "Global Alumni Summit 2025",
        date: "2025-12-20",
        location: "San Francisco, CA",
        image: "https://images.unsplash.com/photo-1590650046871-92c887180603",
        description: "Join us for our annual alumni summit featuring keynote speakers from Fortune 500 companies, networking sessions, and celebration dinner. Reconnect with classmates and build meaningful professional relationships.",
        has_registration: true,
    },
    Event {
        id: "evt2",
        title: "Tech Innovation Workshop",
        date: "2025-12-25",
        location: "Virtual Event",
        image: "https://images.unsplash.com/photo-1758520144420-3e5b22e9b9a4",
        description: "Explore cutting-edge technologies with industry leaders. Learn about AI, blockchain, and cloud computing through hands-on workshops. Perfect for alumni looking to upskill and stay ahead in their careers.",
        has_registration: true,
    },
    Event {
        id: "evt3",
        title: "Alumni Career Fair",
        date: "2026-01-10",
        location: "New York, NY",
        image: "https://images.unsplash.com/photo-1758599543132-ba9b306d715e",
        description: "Meet top recruiters and explore exciting career opportunities across various industries. Network with hiring managers and learn about job openings tailored for our alumni community.",
        has_registration: false,
    },
    Event {
        id: "evt4",
        title: "Winter Homecoming Celebration",
        date: "2026-01-15",
        location: "Global Horizon Campus",
        image: "https://images.pexels.com/photos/34513728/pexels-photo-34513728.jpeg",
        description: "Come back to campus for a nostalgic celebration of memories. Tour the new facilities, meet current students, and enjoy an evening of music, food, and reconnecting with old friends.",
        has_registration: true,
    },
    Event {
        id: "evt5",
        title: "Entrepreneurship Mentorship Program Launch",
        date: "2026-02-01",
        location: "Boston, MA",
        image: "https://images.pexels.com/photos/34504392/pexels-photo-34504392.jpeg",
        description: "Launch event for our new mentorship program connecting experienced entrepreneurs with aspiring alumni founders. Get guidance, funding advice, and access to our startup ecosystem.",
        has_registration: true,
    },
    Event {
        id: "evt6",
        title: "Spring Sports Tournament",
        date: "2026-03-05",
        location: "Los Angeles, CA",
        image: "https://images.unsplash.com/photo-1577985043696-8bd54d9f093f",
        description: "Annual alumni sports tournament featuring basketball, soccer, and tennis competitions. Bring your competitive spirit and team pride for a day of athletics and camaraderie.",
        has_registration: false,
    },
    Event {
        id: "evt7",
        title: "Women in Leadership Conference",
        date: "2026-03-20",
        location: "Chicago, IL",
        image: "https://images.unsplash.com/photo-1590650046871-92c887180603",
        description: "Empowering conference celebrating women alumni leaders. Features panel discussions, workshops on career advancement, and networking opportunities with influential female executives.",
        has_registration: false,
    },
    Event {
        id: "evt8",
        title: "Global Alumni Golf Classic",
        date: "2026-04-12",
        location: "Pebble Beach, CA",
        image: "https://images.unsplash.com/photo-1485182708500-e8f1318ba72",
        description: "Prestigious golf tournament at world-class venue. Enjoy a day on the greens with fellow alumni, followed by awards ceremony and gala dinner overlooking the Pacific Ocean.",
        has_registration: false,
    },
    Event {
        id: "evt9",
        title: "Alumni Art & Culture Gala",
        date: "2026-05-08",
        location: "Washington, DC",
        image: "https://images.pexels.com/photos/1454360/pexels-photo-1454360.jpeg",
        description: "Elegant evening celebrating artistic achievements of our alumni. Features art exhibition, live performances, and fundraising auction supporting arts education programs at Global Horizon.",
        has_registration: false,
    },
    Event {
        id: "evt10",
        title: "50th Anniversary Reunion Weekend",
        date: "2026-06-15",
        location: "Global Horizon Campus",
        image: "https://images.unsplash.com/photo-1541339907198-e08756dedf3f",
        description: "Grand celebration marking 50 years of Global Horizon University. Three days of festivities including campus tours, class reunions, special ceremonies, and commemorative gala dinner.",
        has_registration: false,
    },
];
