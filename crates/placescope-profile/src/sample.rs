//! Reference profile generation.
//!
//! Used in place of the upstream provider when it is not configured or not
//! reachable. The record shape depends on what the business name suggests.

use placescope_core::{BasicInfo, ProfileDetails, ProfileRecord};

/// Name used when neither the provider nor the profile URL yields one.
pub const FALLBACK_BUSINESS_NAME: &str = "분석 대상 업체";

const ACADEMY_MARKERS: &[&str] = &["학원", "아카데미", "스쿨"];
const ENGLISH_MARKERS: &[&str] = &["영어", "English", "미래엔"];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Build the reference profile record for `business_name`.
#[must_use]
pub fn sample_profile(business_name: &str) -> ProfileRecord {
    let name = if business_name.trim().is_empty() {
        FALLBACK_BUSINESS_NAME
    } else {
        business_name.trim()
    };

    let is_academy = ACADEMY_MARKERS.iter().any(|m| name.contains(m));
    let is_english = ENGLISH_MARKERS.iter().any(|m| name.contains(m));

    let details = if is_academy && is_english {
        ProfileDetails {
            description: format!(
                "{name}는 미래엔 교재를 사용하는 체계적인 영어교육 전문학원입니다."
            ),
            facilities: owned(&["주차장", "상담실", "독서실", "대기실"]),
            programs: owned(&["초등영어", "중등영어", "파닉스", "회화"]),
            pricing: "월 12만원~18만원 (과정별 상이)".to_string(),
            images: Vec::new(),
            coupons: owned(&["무료 체험 수업", "형제 할인 10%"]),
            keywords: owned(&["영어학원", "초등영어", "중등영어"]),
        }
    } else {
        ProfileDetails {
            description: format!("{name}는 전문적인 교육 서비스를 제공합니다."),
            facilities: owned(&["주차장", "상담실", "대기실"]),
            programs: owned(&["기본과정", "심화과정", "특별과정"]),
            pricing: "월 10만원~15만원".to_string(),
            images: Vec::new(),
            coupons: owned(&["체험 수업", "신규 할인"]),
            keywords: owned(&["학원", "교육", "수업"]),
        }
    };

    let category = if is_academy && is_english {
        "영어학원"
    } else {
        "교육업"
    };

    ProfileRecord {
        basic_info: BasicInfo {
            name: name.to_string(),
            category: category.to_string(),
            address: "광주광역시 서구 벌원동 123-45".to_string(),
            phone: "062-123-4567".to_string(),
            hours: "월~금 14:00-22:00, 토 09:00-18:00".to_string(),
            rating: 4.2,
            review_count: 28,
        },
        details: ProfileDetails {
            images: owned(&["외관", "교실", "상담실", "교재", "수업모습"]),
            ..details
        },
    }
}
