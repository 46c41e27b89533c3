//! Weighted completeness score for a business profile record.
//!
//! Scores range from 0 to 100 and reflect how much of the profile has been
//! filled in. Absent fields are scoring signals, never errors.

use placescope_core::{is_present, Priority, ProfileRecord, Recommendation, ScoreResult};

// ---------------------------------------------------------------------------
// Weight constants (must sum to exactly 100)
// ---------------------------------------------------------------------------

/// `name` is present.
pub const W_NAME: u32 = 5;
/// `category` is present.
pub const W_CATEGORY: u32 = 5;
/// `address` is present.
pub const W_ADDRESS: u32 = 10;
/// `phone` is present.
pub const W_PHONE: u32 = 10;
/// `hours` is present.
pub const W_HOURS: u32 = 10;
/// Full marks at [`WELL_REVIEWED`] reviews, [`W_REVIEWS_PARTIAL`] below that.
pub const W_REVIEWS: u32 = 5;
/// `description` is present.
pub const W_DESCRIPTION: u32 = 10;
/// At least one facility listed.
pub const W_FACILITIES: u32 = 10;
/// At least one program listed.
pub const W_PROGRAMS: u32 = 10;
/// `pricing` is present.
pub const W_PRICING: u32 = 5;
/// [`POINTS_PER_IMAGE`] per image label up to [`FULL_IMAGE_SET`] labels.
pub const W_IMAGES: u32 = 10;
/// At least one coupon offered.
pub const W_COUPONS: u32 = 5;
/// At least one search keyword registered.
pub const W_KEYWORDS: u32 = 5;

const _: () = assert!(
    W_NAME
        + W_CATEGORY
        + W_ADDRESS
        + W_PHONE
        + W_HOURS
        + W_REVIEWS
        + W_DESCRIPTION
        + W_FACILITIES
        + W_PROGRAMS
        + W_PRICING
        + W_IMAGES
        + W_COUPONS
        + W_KEYWORDS
        == 100,
    "completeness weights must sum to exactly 100"
);

pub const W_REVIEWS_PARTIAL: u32 = 2;
pub const WELL_REVIEWED: u32 = 10;
pub const FULL_IMAGE_SET: usize = 5;
pub const POINTS_PER_IMAGE: u32 = 2;
const _: () = assert!(POINTS_PER_IMAGE * FULL_IMAGE_SET as u32 == W_IMAGES);

const STRONG_RATING: f64 = 4.0;
const DIVERSE_PROGRAMS: usize = 3;

/// Accumulates points and findings in rubric order.
#[derive(Default)]
struct Tally {
    points: u32,
    missing: Vec<String>,
    strengths: Vec<String>,
    recommendations: Vec<Recommendation>,
}

impl Tally {
    fn award(&mut self, points: u32) {
        self.points += points;
    }

    fn missing(&mut self, element: &str) {
        if !self.missing.iter().any(|m| m == element) {
            self.missing.push(element.to_string());
        }
    }

    fn strength(&mut self, strength: &str) {
        if !self.strengths.iter().any(|s| s == strength) {
            self.strengths.push(strength.to_string());
        }
    }

    fn recommend(&mut self, priority: Priority, title: &str, description: &str) {
        self.recommendations
            .push(Recommendation::new(priority, title, description));
    }

    /// Award `weight` when `present`, otherwise record the gap and its fix.
    fn check(
        &mut self,
        present: bool,
        weight: u32,
        element: &str,
        fix: (Priority, &str, &str),
    ) {
        if present {
            self.award(weight);
        } else {
            self.missing(element);
            self.recommend(fix.0, fix.1, fix.2);
        }
    }

    fn finish(mut self) -> ScoreResult {
        // `sort_by_key` is stable, so generation order survives within a priority.
        self.recommendations
            .sort_by_key(|r| std::cmp::Reverse(r.priority));
        ScoreResult {
            completeness_score: u8::try_from(self.points.min(100)).unwrap_or(100),
            missing_elements: self.missing,
            strengths: self.strengths,
            recommendations: self.recommendations,
        }
    }
}

/// Score a profile record.
///
/// Walks the rubric in a fixed order, so missing elements, strengths and
/// same-priority recommendations always come out in that order.
#[must_use]
pub fn score(record: &ProfileRecord) -> ScoreResult {
    let basic = &record.basic_info;
    let details = &record.details;
    let mut tally = Tally::default();

    // Basic information
    tally.check(
        is_present(&basic.name),
        W_NAME,
        "business name",
        (
            Priority::High,
            "Register the business name",
            "Customers and search results identify the place by its registered name.",
        ),
    );
    tally.check(
        is_present(&basic.category),
        W_CATEGORY,
        "category",
        (
            Priority::Medium,
            "Choose a business category",
            "A precise category decides which searches the place can appear in.",
        ),
    );
    tally.check(
        is_present(&basic.address),
        W_ADDRESS,
        "address",
        (
            Priority::High,
            "Add the street address",
            "Local search ranks by distance; without an address the place cannot be placed on the map.",
        ),
    );
    tally.check(
        is_present(&basic.phone),
        W_PHONE,
        "phone number",
        (
            Priority::High,
            "Add a contact number",
            "A phone number lets visitors call directly from the listing.",
        ),
    );
    tally.check(
        is_present(&basic.hours),
        W_HOURS,
        "opening hours",
        (
            Priority::High,
            "Publish opening hours",
            "List weekday and weekend hours so visitors know when to come.",
        ),
    );

    let basics_complete = [
        &basic.name,
        &basic.category,
        &basic.address,
        &basic.phone,
        &basic.hours,
    ]
    .iter()
    .all(|field| is_present(field));
    if basics_complete {
        tally.strength("complete basic information");
    }

    // Reviews
    match basic.review_count {
        0 => {
            tally.missing("reviews");
            tally.recommend(
                Priority::Medium,
                "Encourage customer reviews",
                "Ask satisfied customers to leave a review; listings without reviews rank lower.",
            );
        }
        n if n < WELL_REVIEWED => {
            tally.award(W_REVIEWS_PARTIAL);
            tally.recommend(
                Priority::Medium,
                "Collect more reviews",
                "A handful of reviews is a start; aim for at least ten recent ones.",
            );
        }
        _ => tally.award(W_REVIEWS),
    }
    if basic.review_count > 0 {
        if basic.rating >= STRONG_RATING {
            if basic.review_count >= WELL_REVIEWED {
                tally.strength("strong customer rating");
            }
        } else {
            tally.recommend(
                Priority::Medium,
                "Respond to low ratings",
                "Reply to critical reviews and address the issues they raise.",
            );
        }
    }

    // Details
    tally.check(
        is_present(&details.description),
        W_DESCRIPTION,
        "description",
        (
            Priority::High,
            "Write a business description",
            "Describe what the place offers, who it serves and what sets it apart.",
        ),
    );
    tally.check(
        record.facility_count() > 0,
        W_FACILITIES,
        "facilities",
        (
            Priority::Medium,
            "List available facilities",
            "Parking, waiting rooms and similar amenities are common search filters.",
        ),
    );

    let programs = record.program_count();
    tally.check(
        programs > 0,
        W_PROGRAMS,
        "programs",
        (
            Priority::Medium,
            "Describe programs and courses",
            "Explain each program's features and teaching approach in concrete terms.",
        ),
    );
    if programs >= DIVERSE_PROGRAMS {
        tally.strength("diverse programs");
    }

    tally.check(
        is_present(&details.pricing),
        W_PRICING,
        "pricing",
        (
            Priority::Low,
            "Publish pricing",
            "Even a price range helps visitors decide before they call.",
        ),
    );

    let images = record.image_count();
    let counted = u32::try_from(images.min(FULL_IMAGE_SET)).unwrap_or(0);
    tally.award(counted * POINTS_PER_IMAGE);
    if images == 0 {
        tally.missing("images");
    }
    if images < FULL_IMAGE_SET {
        tally.recommend(
            Priority::Medium,
            "Add more photos",
            "Show the exterior, rooms, materials and activities; aim for at least five photos.",
        );
    } else {
        tally.strength("rich photo coverage");
    }

    let coupons = record.coupon_count();
    tally.check(
        coupons > 0,
        W_COUPONS,
        "coupons",
        (
            Priority::Low,
            "Offer a coupon or trial",
            "A free trial or first-visit discount converts listing views into visits.",
        ),
    );
    if coupons > 0 {
        tally.strength("discount offers");
    }

    tally.check(
        record.keyword_count() > 0,
        W_KEYWORDS,
        "keywords",
        (
            Priority::High,
            "Register search keywords",
            "Add the keywords customers search for, including brand and neighborhood terms.",
        ),
    );

    tally.finish()
}
