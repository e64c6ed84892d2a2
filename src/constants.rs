// DOM, asset and copy constants for the web front-end. Layout and motion
// tuning lives in `hero_core::constants`.

// Host page
pub const HERO_CONTAINER_ID: &str = "hero";

// Element classes (styled by the host page's stylesheet)
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_LOGO: &str = "hero-logo";
pub const CLASS_INTRO: &str = "hero-intro";
pub const CLASS_HEADLINE: &str = "hero-headline";
pub const CLASS_STAGE: &str = "hero-stage";
pub const CLASS_CARD: &str = "hero-card";
pub const CLASS_CARD_INNER: &str = "hero-card-inner";
pub const CLASS_CARD_FRONT: &str = "hero-card-front";
pub const CLASS_CARD_BACK: &str = "hero-card-back";
pub const CLASS_OVERLAY: &str = "hero-overlay";
pub const CLASS_OVERLAY_CLOSE: &str = "hero-overlay-close";
pub const CLASS_OVERLAY_LABEL: &str = "hero-overlay-label";
pub const CLASS_MUTE: &str = "hero-mute";
// Text roles inside the intro, headline and card back
pub const CLASS_TAGLINE: &str = "tagline";
pub const CLASS_TITLE: &str = "title";
pub const CLASS_HINT: &str = "hint";
pub const CLASS_BODY: &str = "body";
pub const CLASS_KICKER: &str = "kicker";
pub const CLASS_LABEL: &str = "label";

// Card size (px)
pub const CARD_WIDTH_PX: f32 = 60.0;
pub const CARD_HEIGHT_PX: f32 = 85.0;

// Ambient audio
pub const AMBIENT_AUDIO_URL: &str = "/audio/background.mp3";
// Document events that count as a user gesture for starting blocked audio
pub const AUDIO_UNLOCK_EVENTS: [&str; 4] = ["click", "keydown", "touchstart", "scroll"];

// Video overlay
pub const VIDEO_MASK: &str = "radial-gradient(ellipse at center, black 75%, transparent 98%)";

// Copy
pub const BRAND_NAME: &str = "OTRO ANGULO";
pub const TAGLINE: &str = "Cinematografía Aérea";
pub const TITLE: &str = "NEW PERSPECTIVE";
pub const SCROLL_HINT: &str = "SCROLL TO EXPLORE";
pub const HEADLINE_BODY: &str = "Eleva tu narrativa con impresionantes videos en 4K capturados con drones. Nos especializamos en capturar los momentos que importan desde ángulos que nunca imaginaste.";
pub const CARD_BACK_KICKER: &str = "View";
pub const CARD_BACK_LABEL: &str = "Details";
pub const CLOSE_LABEL: &str = "✕ Cerrar";
pub const MUTE_LABEL_WHEN_MUTED: &str = "Activar audio";
pub const MUTE_LABEL_WHEN_PLAYING: &str = "Silenciar audio";
