//! Threshold policy that turns one forecast day into a [`RecommendationBundle`].
//!
//! Every decision is an ordered table of [`Rule`]s evaluated top to bottom;
//! the first predicate that holds picks the branch, and a fallback covers the
//! rest. Sentinel values (`NAN`, `-1`) fail every comparison, so missing data
//! always lands on the fallback.

use crate::{
    challenge::pick_challenge,
    daylight::compute_daylight,
    model::{CreativeExtras, DayPlan, ForecastDay, OutfitAdvice, RecommendationBundle},
    weather_code::WeatherKind,
};

pub const HEAVY_RAIN_MM: f64 = 5.0;
pub const WARM_C: f64 = 25.0;
pub const HOT_C: f64 = 30.0;
pub const CHILLY_C: f64 = 12.0;

pub const LOCAL_IDEA: &str =
    "Local discovery: Search for a small independent café or a local artisan shop and try one new thing.";

/// The raw values every decision reads, with the derived flags as methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub max_temp: f64,
    pub min_temp: f64,
    pub rain: f64,
    pub kind: WeatherKind,
}

impl Conditions {
    pub fn from_day(day: &ForecastDay) -> Self {
        Self {
            max_temp: day.max_temp,
            min_temp: day.min_temp,
            rain: day.rain_sum,
            kind: WeatherKind::from_code(day.weather_code),
        }
    }

    pub fn heavy_rain(&self) -> bool {
        self.rain > HEAVY_RAIN_MM
    }

    pub fn warm(&self) -> bool {
        self.max_temp >= WARM_C
    }

    pub fn hot(&self) -> bool {
        self.max_temp >= HOT_C
    }

    pub fn chilly_by_min(&self) -> bool {
        self.min_temp < CHILLY_C
    }

    pub fn chilly_by_max(&self) -> bool {
        self.max_temp < CHILLY_C
    }

    pub fn clear(&self) -> bool {
        self.kind == WeatherKind::Clear
    }

    pub fn clear_and_warm(&self) -> bool {
        self.clear() && self.warm()
    }

    pub fn partly_cloudy(&self) -> bool {
        self.kind == WeatherKind::PartlyCloudy
    }

    pub fn foggy(&self) -> bool {
        self.kind == WeatherKind::Fog
    }

    pub fn stormy(&self) -> bool {
        self.kind == WeatherKind::Storm
    }

    pub fn needs_rain_gear(&self) -> bool {
        self.heavy_rain() || self.kind.is_wet()
    }
}

/// One row of a decision table.
#[derive(Clone, Copy)]
pub struct Rule<B> {
    pub when: fn(&Conditions) -> bool,
    pub then: B,
}

impl<B: std::fmt::Debug> std::fmt::Debug for Rule<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("then", &self.then).finish_non_exhaustive()
    }
}

/// First matching rule wins; later rules are never consulted.
pub fn decide<B: Copy>(rules: &[Rule<B>], fallback: B, conditions: &Conditions) -> B {
    rules
        .iter()
        .find(|rule| (rule.when)(conditions))
        .map_or(fallback, |rule| rule.then)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPlanBranch {
    Cozy,
    Beach,
    Scenic,
    Hike,
    Fog,
    Storm,
    Flexible,
}

pub const DAY_PLAN_RULES: &[Rule<DayPlanBranch>] = &[
    Rule { when: Conditions::heavy_rain, then: DayPlanBranch::Cozy },
    Rule { when: Conditions::clear_and_warm, then: DayPlanBranch::Beach },
    Rule { when: Conditions::clear, then: DayPlanBranch::Scenic },
    Rule { when: Conditions::partly_cloudy, then: DayPlanBranch::Hike },
    Rule { when: Conditions::foggy, then: DayPlanBranch::Fog },
    Rule { when: Conditions::stormy, then: DayPlanBranch::Storm },
];

impl DayPlanBranch {
    pub fn select(conditions: &Conditions) -> Self {
        decide(DAY_PLAN_RULES, DayPlanBranch::Flexible, conditions)
    }

    /// Morning, afternoon and evening suggestions.
    pub fn triad(self) -> [&'static str; 3] {
        match self {
            DayPlanBranch::Cozy => [
                "☕ Slow morning: local café or museum visit with a good pastry.",
                "📚 Creative afternoon: visit an exhibition, indoor market, or coworking café.",
                "🎬 Cozy evening: movie night or a cooking experiment at home.",
            ],
            DayPlanBranch::Beach => [
                "🌅 Morning: sunrise walk or beach jog; bring sunglasses.",
                "🏖️ Afternoon: beach, rooftop lunch, or an outdoor sport.",
                "🍹 Evening: sunset drinks at a terrace or a short golden-hour photo walk.",
            ],
            DayPlanBranch::Scenic => [
                "🚶 Morning: scenic walk or city photography while light.",
                "☕ Afternoon: café hopping or a relaxed bike ride.",
                "🌠 Evening: stroll along a bright promenade or live acoustic gig.",
            ],
            DayPlanBranch::Hike => [
                "🌤️ Morning: relaxed hike or farmers market visit.",
                "📷 Afternoon: search for soft-light photo spots; try a new café.",
                "🕯️ Evening: small restaurant with a cozy ambience.",
            ],
            DayPlanBranch::Fog => [
                "🌫️ Morning: gentle yoga or journaling at a calm café.",
                "📖 Afternoon: art gallery or a bookshop crawl.",
                "🍲 Evening: try a slow-cooked dish or a warming stew.",
            ],
            DayPlanBranch::Storm => [
                "⚠️ Morning: check local advisories; keep indoor options.",
                "🔒 Afternoon: indoor activities, hobby projects, or online classes.",
                "🕯️ Evening: board games, baking, or a warm bath and playlist.",
            ],
            DayPlanBranch::Flexible => [
                "🌈 Morning: flexible — short walk or a relaxed start.",
                "🛍️ Afternoon: visit local shops or a covered market.",
                "🌃 Evening: choose between a cultural spot or a cosy dinner.",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibe {
    Radiant,
    Cozy,
    Stormy,
    Balanced,
}

pub const VIBE_RULES: &[Rule<Vibe>] = &[
    Rule { when: Conditions::clear_and_warm, then: Vibe::Radiant },
    Rule { when: Conditions::heavy_rain, then: Vibe::Cozy },
    Rule { when: Conditions::stormy, then: Vibe::Stormy },
];

impl Vibe {
    pub fn select(conditions: &Conditions) -> Self {
        decide(VIBE_RULES, Vibe::Balanced, conditions)
    }

    pub fn label(self) -> &'static str {
        match self {
            Vibe::Radiant => "Vibe: ☀️ Radiant & energetic — perfect for getting out and moving.",
            Vibe::Cozy => "Vibe: 🌧️ Cozy & introspective — ideal for slow, creative pursuits.",
            Vibe::Stormy => "Vibe: ⛈️ Stormy & dramatic — pick safe, indoor options.",
            Vibe::Balanced => "Vibe: 🌤️ Balanced & adaptable — good day to explore thoughtfully.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitBranch {
    Hot,
    Warm,
    Chilly,
    SmartCasual,
}

pub const OUTFIT_RULES: &[Rule<OutfitBranch>] = &[
    Rule { when: Conditions::hot, then: OutfitBranch::Hot },
    Rule { when: Conditions::warm, then: OutfitBranch::Warm },
    Rule { when: Conditions::chilly_by_max, then: OutfitBranch::Chilly },
];

impl OutfitBranch {
    pub fn select(conditions: &Conditions) -> Self {
        decide(OUTFIT_RULES, OutfitBranch::SmartCasual, conditions)
    }

    pub fn outfit(self) -> &'static str {
        match self {
            OutfitBranch::Hot => "Outfit: Lightweight T-shirt, breathable shorts or linen pants.",
            OutfitBranch::Warm => "Outfit: Short-sleeve shirt or blouse with light trousers.",
            OutfitBranch::Chilly => "Outfit: Layered look — thermal base, sweater, and a jacket.",
            OutfitBranch::SmartCasual => {
                "Outfit: Smart-casual layers — shirt and a light jacket or cardigan."
            }
        }
    }

    pub fn accessories(self) -> &'static str {
        match self {
            OutfitBranch::Hot => "Accessories: Sunglasses, wide-brim hat, SPF 50+ sunscreen.",
            OutfitBranch::Warm => "Accessories: Sunglasses, light scarf (for sun or breeze).",
            OutfitBranch::Chilly => "Accessories: Scarf, gloves if you tend to get cold.",
            OutfitBranch::SmartCasual => {
                "Accessories: Comfortable shoes and a small foldable umbrella."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packing {
    Waterproof,
    DayKit,
}

pub const PACKING_RULES: &[Rule<Packing>] =
    &[Rule { when: Conditions::needs_rain_gear, then: Packing::Waterproof }];

impl Packing {
    pub fn select(conditions: &Conditions) -> Self {
        decide(PACKING_RULES, Packing::DayKit, conditions)
    }

    pub fn text(self) -> &'static str {
        match self {
            Packing::Waterproof => {
                "Packing: Waterproof jacket, compact umbrella, water-resistant bag, quick-dry towel."
            }
            Packing::DayKit => {
                "Packing: Reusable water bottle, phone power bank, sunglasses, small first-aid kit."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playlist {
    CozyAcoustic,
    SunshineHits,
    GoldenHour,
    StormyClassics,
    Chillout,
}

pub const PLAYLIST_RULES: &[Rule<Playlist>] = &[
    Rule { when: Conditions::heavy_rain, then: Playlist::CozyAcoustic },
    Rule { when: Conditions::clear_and_warm, then: Playlist::SunshineHits },
    Rule { when: Conditions::clear, then: Playlist::GoldenHour },
    Rule { when: Conditions::stormy, then: Playlist::StormyClassics },
];

impl Playlist {
    pub fn select(conditions: &Conditions) -> Self {
        decide(PLAYLIST_RULES, Playlist::Chillout, conditions)
    }

    pub fn label(self) -> &'static str {
        match self {
            Playlist::CozyAcoustic => "Cozy Acoustic — mellow indie, warm vocals",
            Playlist::SunshineHits => "Sunshine Hits — upbeat, beachy, feel-good pop",
            Playlist::GoldenHour => "Golden Hour — gentle indie & acoustic",
            Playlist::StormyClassics => "Stormy Classics — dramatic instrumental and ambient",
            Playlist::Chillout => "Chillout Mix — soft electronic and lo-fi beats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoTip {
    GoldenHour,
    Fog,
    DramaticSky,
    StreetScene,
}

pub const PHOTO_TIP_RULES: &[Rule<PhotoTip>] = &[
    Rule { when: Conditions::clear, then: PhotoTip::GoldenHour },
    Rule { when: Conditions::foggy, then: PhotoTip::Fog },
    Rule { when: Conditions::stormy, then: PhotoTip::DramaticSky },
];

impl PhotoTip {
    pub fn select(conditions: &Conditions) -> Self {
        decide(PHOTO_TIP_RULES, PhotoTip::StreetScene, conditions)
    }

    pub fn text(self) -> &'static str {
        match self {
            PhotoTip::GoldenHour => {
                "Photo tip: Golden-hour shots near water or open plazas; look for reflections or shadow patterns."
            }
            PhotoTip::Fog => {
                "Photo tip: Fog and mist add mood; focus on silhouettes and soft backgrounds."
            }
            PhotoTip::DramaticSky => {
                "Photo tip: Dramatic skies—capture textured clouds and contrasting light near buildings."
            }
            PhotoTip::StreetScene => {
                "Photo tip: Street scenes and candid portraits work well; try shallow depth of field for subject focus."
            }
        }
    }
}

/// Derive the full bundle for one day.
///
/// `_location_name` is accepted so every caller passes the same inputs; no
/// current template reads it. The mini-challenge is keyed by `date` exactly
/// as the caller typed it.
pub fn build_recommendations(
    day: &ForecastDay,
    _location_name: &str,
    date: &str,
) -> RecommendationBundle {
    let conditions = Conditions::from_day(day);

    let [morning, afternoon, evening] = DayPlanBranch::select(&conditions).triad();
    let outfit = OutfitBranch::select(&conditions);

    RecommendationBundle {
        vibe: Vibe::select(&conditions).label().to_string(),
        day_plan: DayPlan {
            morning: morning.to_string(),
            afternoon: afternoon.to_string(),
            evening: evening.to_string(),
            daylight: format!("Daylight: {}", compute_daylight(&day.sunrise, &day.sunset)),
        },
        outfit: OutfitAdvice {
            outfit: outfit.outfit().to_string(),
            accessories: outfit.accessories().to_string(),
            pack: Packing::select(&conditions).text().to_string(),
        },
        playlist: Playlist::select(&conditions).label().to_string(),
        creative: CreativeExtras {
            photo_tip: PhotoTip::select(&conditions).text().to_string(),
            mini_challenge: pick_challenge(day.weather_code, date).to_string(),
            local_idea: LOCAL_IDEA.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::{CHALLENGES, STORM_SAFE_CHALLENGE};

    fn day(code: i32, max_temp: f64, min_temp: f64, rain: f64) -> ForecastDay {
        ForecastDay {
            date: "2024-06-01".into(),
            max_temp,
            min_temp,
            rain_sum: rain,
            precipitation_sum: rain,
            weather_code: code,
            sunrise: "2024-06-01T06:00:00".into(),
            sunset: "2024-06-01T20:00:00".into(),
        }
    }

    fn conditions(code: i32, max_temp: f64, rain: f64) -> Conditions {
        Conditions::from_day(&day(code, max_temp, 15.0, rain))
    }

    #[test]
    fn end_to_end_clear_warm_day() {
        let d = day(0, 27.0, 18.0, 0.0);
        let bundle = build_recommendations(&d, "Lisbon, Lisbon, Portugal", "2024-06-01");

        assert_eq!(bundle.vibe, Vibe::Radiant.label());
        assert_eq!(bundle.day_plan.morning, DayPlanBranch::Beach.triad()[0]);
        assert_eq!(bundle.day_plan.daylight, "Daylight: 14h 0m (from 06:00 to 20:00)");
        assert_eq!(bundle.outfit.outfit, OutfitBranch::Warm.outfit());
        assert_eq!(bundle.outfit.accessories, OutfitBranch::Warm.accessories());
        assert_eq!(bundle.outfit.pack, Packing::DayKit.text());
        assert_eq!(bundle.playlist, Playlist::SunshineHits.label());
        assert_eq!(bundle.creative.photo_tip, PhotoTip::GoldenHour.text());
        assert_eq!(bundle.creative.local_idea, LOCAL_IDEA);
    }

    #[test]
    fn identical_inputs_give_identical_bundles() {
        let d = day(45, 14.0, 8.0, 1.2);
        let a = build_recommendations(&d, "Porto", "2024-11-03");
        let b = build_recommendations(&d, "Porto", "2024-11-03");
        assert_eq!(a, b);
    }

    #[test]
    fn heavy_rain_beats_clear_and_warm_in_day_plan() {
        let c = conditions(0, 26.0, 6.0);
        assert_eq!(DayPlanBranch::select(&c), DayPlanBranch::Cozy);
        // The vibe table checks clear-and-warm first.
        assert_eq!(Vibe::select(&c), Vibe::Radiant);
        assert_eq!(Playlist::select(&c), Playlist::CozyAcoustic);
        assert_eq!(Packing::select(&c), Packing::Waterproof);
    }

    #[test]
    fn day_plan_branches_in_order() {
        assert_eq!(DayPlanBranch::select(&conditions(0, 20.0, 0.0)), DayPlanBranch::Scenic);
        assert_eq!(DayPlanBranch::select(&conditions(2, 20.0, 0.0)), DayPlanBranch::Hike);
        assert_eq!(DayPlanBranch::select(&conditions(48, 20.0, 0.0)), DayPlanBranch::Fog);
        assert_eq!(DayPlanBranch::select(&conditions(95, 20.0, 0.0)), DayPlanBranch::Storm);
        assert_eq!(DayPlanBranch::select(&conditions(61, 20.0, 3.0)), DayPlanBranch::Flexible);
        assert_eq!(DayPlanBranch::select(&conditions(73, 20.0, 0.0)), DayPlanBranch::Flexible);
    }

    #[test]
    fn rain_threshold_is_strict() {
        assert!(!conditions(61, 20.0, 5.0).heavy_rain());
        assert!(conditions(61, 20.0, 5.01).heavy_rain());
    }

    #[test]
    fn vibe_branches() {
        assert_eq!(Vibe::select(&conditions(0, 25.0, 0.0)), Vibe::Radiant);
        assert_eq!(Vibe::select(&conditions(0, 24.9, 0.0)), Vibe::Balanced);
        assert_eq!(Vibe::select(&conditions(82, 20.0, 8.0)), Vibe::Cozy);
        assert_eq!(Vibe::select(&conditions(82, 20.0, 1.0)), Vibe::Stormy);
        assert_eq!(Vibe::select(&conditions(3, 20.0, 1.0)), Vibe::Balanced);
    }

    #[test]
    fn outfit_branches() {
        assert_eq!(OutfitBranch::select(&conditions(0, 30.0, 0.0)), OutfitBranch::Hot);
        assert_eq!(OutfitBranch::select(&conditions(0, 29.9, 0.0)), OutfitBranch::Warm);
        assert_eq!(OutfitBranch::select(&conditions(0, 11.9, 0.0)), OutfitBranch::Chilly);
        assert_eq!(OutfitBranch::select(&conditions(0, 12.0, 0.0)), OutfitBranch::SmartCasual);
    }

    #[test]
    fn chilly_by_min_does_not_drive_outfit() {
        let c = Conditions::from_day(&day(2, 18.0, 3.0, 0.0));
        assert!(c.chilly_by_min());
        assert!(!c.chilly_by_max());
        assert_eq!(OutfitBranch::select(&c), OutfitBranch::SmartCasual);
    }

    #[test]
    fn packing_for_rain_bands_and_storms() {
        assert_eq!(Packing::select(&conditions(51, 20.0, 0.0)), Packing::Waterproof);
        assert_eq!(Packing::select(&conditions(67, 20.0, 0.0)), Packing::Waterproof);
        assert_eq!(Packing::select(&conditions(80, 20.0, 0.0)), Packing::Waterproof);
        assert_eq!(Packing::select(&conditions(71, 20.0, 0.0)), Packing::DayKit);
        assert_eq!(Packing::select(&conditions(3, 20.0, 0.0)), Packing::DayKit);
    }

    #[test]
    fn playlist_branches() {
        assert_eq!(Playlist::select(&conditions(0, 18.0, 0.0)), Playlist::GoldenHour);
        assert_eq!(Playlist::select(&conditions(81, 18.0, 0.0)), Playlist::StormyClassics);
        assert_eq!(Playlist::select(&conditions(45, 18.0, 0.0)), Playlist::Chillout);
    }

    #[test]
    fn photo_tip_branches() {
        assert_eq!(PhotoTip::select(&conditions(0, 10.0, 9.0)), PhotoTip::GoldenHour);
        assert_eq!(PhotoTip::select(&conditions(45, 10.0, 0.0)), PhotoTip::Fog);
        assert_eq!(PhotoTip::select(&conditions(96, 10.0, 0.0)), PhotoTip::DramaticSky);
        assert_eq!(PhotoTip::select(&conditions(1, 10.0, 0.0)), PhotoTip::StreetScene);
    }

    #[test]
    fn nan_max_temp_falls_through_temperature_branches() {
        let c = conditions(0, f64::NAN, 0.0);
        assert!(!c.warm());
        assert!(!c.hot());
        assert!(!c.chilly_by_max());

        assert_eq!(DayPlanBranch::select(&c), DayPlanBranch::Scenic);
        assert_eq!(Vibe::select(&c), Vibe::Balanced);
        assert_eq!(OutfitBranch::select(&c), OutfitBranch::SmartCasual);
        assert_eq!(Playlist::select(&c), Playlist::GoldenHour);
    }

    #[test]
    fn all_sentinels_route_to_defaults() {
        let empty = ForecastDay {
            date: String::new(),
            max_temp: f64::NAN,
            min_temp: f64::NAN,
            rain_sum: f64::NAN,
            precipitation_sum: f64::NAN,
            weather_code: -1,
            sunrise: String::new(),
            sunset: String::new(),
        };
        let bundle = build_recommendations(&empty, "Unknown location", "2024-01-01");

        assert_eq!(bundle.vibe, Vibe::Balanced.label());
        assert_eq!(bundle.day_plan.evening, DayPlanBranch::Flexible.triad()[2]);
        assert_eq!(bundle.day_plan.daylight, "Daylight: N/A");
        assert_eq!(bundle.outfit.outfit, OutfitBranch::SmartCasual.outfit());
        assert_eq!(bundle.outfit.pack, Packing::DayKit.text());
        assert_eq!(bundle.playlist, Playlist::Chillout.label());
        assert_eq!(bundle.creative.photo_tip, PhotoTip::StreetScene.text());
        assert_eq!(bundle.creative.mini_challenge, CHALLENGES[4]);
    }

    #[test]
    fn storm_bundle_uses_storm_safe_challenge() {
        let d = day(95, 22.0, 16.0, 2.0);
        let bundle = build_recommendations(&d, "Miami", "2024-06-01");
        assert_eq!(bundle.creative.mini_challenge, STORM_SAFE_CHALLENGE);
        assert_eq!(bundle.vibe, Vibe::Stormy.label());
        assert_eq!(bundle.day_plan.afternoon, DayPlanBranch::Storm.triad()[1]);
    }

    #[test]
    fn decide_uses_fallback_on_empty_table() {
        let c = conditions(0, 30.0, 0.0);
        assert_eq!(decide::<u8>(&[], 7, &c), 7);
    }
}
