//! The fixed media catalog rendered as cards.

/// One drone reel: a thumbnail shown on the card and the video opened when
/// the card is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub thumbnail_url: &'static str,
    pub video_url: &'static str,
    pub category: &'static str,
}

const fn item(
    thumbnail_url: &'static str,
    video_url: &'static str,
    category: &'static str,
) -> MediaItem {
    MediaItem {
        thumbnail_url,
        video_url,
        category,
    }
}

pub const CATEGORY_WEDDINGS: &str = "Bodas";
pub const CATEGORY_AGRICULTURE: &str = "Agricultura";
pub const CATEGORY_SPORT: &str = "Deporte";
pub const CATEGORY_OTHER: &str = "Otros";

pub static CATALOG: [MediaItem; 20] = [
    // Weddings
    item(
        "https://images.unsplash.com/photo-1519741497674-611481863552?w=300&q=80",
        "/videos/boda1.mp4",
        CATEGORY_WEDDINGS,
    ),
    item(
        "https://images.unsplash.com/photo-1606800052052-a08af7148866?w=300&q=80",
        "/videos/boda2.mp4",
        CATEGORY_WEDDINGS,
    ),
    item(
        "https://images.unsplash.com/photo-1465495976277-4387d4b0b4c6?w=300&q=80",
        "/videos/boda3.mp4",
        CATEGORY_WEDDINGS,
    ),
    item(
        "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=300&q=80",
        "/videos/boda4.mp4",
        CATEGORY_WEDDINGS,
    ),
    item(
        "https://images.unsplash.com/photo-1591604466107-ec97de577aff?w=300&q=80",
        "/videos/boda5.mp4",
        CATEGORY_WEDDINGS,
    ),
    // Agriculture
    item(
        "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=300&q=80",
        "/videos/agricultura1.mp4",
        CATEGORY_AGRICULTURE,
    ),
    item(
        "https://images.unsplash.com/photo-1574943320219-553eb213f72d?w=300&q=80",
        "/videos/agricultura2.mp4",
        CATEGORY_AGRICULTURE,
    ),
    item(
        "https://images.unsplash.com/photo-1560493676-04071c5f467b?w=300&q=80",
        "/videos/agricultura3.mp4",
        CATEGORY_AGRICULTURE,
    ),
    item(
        "https://images.unsplash.com/photo-1500382017468-9049fed747ef?w=300&q=80",
        "/videos/agricultura4.mp4",
        CATEGORY_AGRICULTURE,
    ),
    item(
        "https://images.unsplash.com/photo-1464226184884-fa280b87c399?w=300&q=80",
        "/videos/agricultura5.mp4",
        CATEGORY_AGRICULTURE,
    ),
    // Sport
    item(
        "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=300&q=80",
        "/videos/deporte1.mp4",
        CATEGORY_SPORT,
    ),
    item(
        "https://images.unsplash.com/photo-1517649763962-0c623066013b?w=300&q=80",
        "/videos/deporte2.mp4",
        CATEGORY_SPORT,
    ),
    item(
        "https://images.unsplash.com/photo-1552674605-db6ffd4facb5?w=300&q=80",
        "/videos/deporte3.mp4",
        CATEGORY_SPORT,
    ),
    item(
        "https://images.unsplash.com/photo-1546519638-68e109498ffc?w=300&q=80",
        "/videos/deporte4.mp4",
        CATEGORY_SPORT,
    ),
    item(
        "https://images.unsplash.com/photo-1517466787929-bc90951d0974?w=300&q=80",
        "/videos/deporte5.mp4",
        CATEGORY_SPORT,
    ),
    // Landscapes, cities, nature
    item(
        "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=300&q=80",
        "/videos/otro1.mp4",
        CATEGORY_OTHER,
    ),
    item(
        "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?w=300&q=80",
        "/videos/otro2.mp4",
        CATEGORY_OTHER,
    ),
    item(
        "https://images.unsplash.com/photo-1480714378408-67cf0d13bc1b?w=300&q=80",
        "/videos/otro3.mp4",
        CATEGORY_OTHER,
    ),
    item(
        "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?w=300&q=80",
        "/videos/otro4.mp4",
        CATEGORY_OTHER,
    ),
    item(
        "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=300&q=80",
        "/videos/otro5.mp4",
        CATEGORY_OTHER,
    ),
];

#[inline]
pub fn catalog() -> &'static [MediaItem] {
    &CATALOG
}
