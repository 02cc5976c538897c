//! The household rule set installed by [`crate::Agent::home`].

/// Fact asserted at startup: someone is at home.
pub const PERSON_HOME: &str = "kişi_evde";

/// Direct device-control rules.
pub const BASIC_RULES: &[&str] = &[
    "kişi_üşüyor -> ısıtıcı_aç",
    "zaman_gece & kişi_evde & ışık_isteği -> ışık_aç",
    "televizyon_isteği -> televizyon_aç",
    "kişi_çıkıyor -> kapı_kapat",
    "zaman_sabah & kişi_evde & perde_isteği -> perde_aç",
    "ısıtıcı_aç_isteği -> ısıtıcı_aç",
    "ısıtıcı_kapat_isteği -> ısıtıcı_kapat",
    "kapı_aç_isteği -> kapı_aç",
    "kapı_kapat_isteği -> kapı_kapat",
    "ışık_aç_isteği -> ışık_aç",
    "ışık_kapat_isteği -> ışık_kapat",
    "perde_aç_isteği -> perde_aç",
    "perde_kapat_isteği -> perde_kapat",
    "televizyon_aç_isteği -> televizyon_aç",
    "televizyon_kapat_isteği -> televizyon_kapat",
];

/// Context- and comfort-aware rules.
///
/// The entertainment rule is written with parentheses. Under the flat
/// grammar they are part of the atom names (`(zaman_sabah` and
/// `zaman_akşam)`), so the rule only fires under the grouped grammar.
pub const ADVANCED_RULES: &[&str] = &[
    "zaman_gece & !kişi_evde -> ışık_kapat",
    "zaman_sabah & !perde_açık & kişi_uyanıyor -> perde_aç",
    "yüksek_sıcaklık & kişi_evde -> soğutma_öner",
    "zaman_gece & kişi_uyuma_hazırlığı -> gece_modu",
    "(zaman_sabah | zaman_akşam) & kişi_evde & !televizyon_açık & eğlence_isteği -> televizyon_aç",
    "kullanıcı_duygu_mutlu & zaman_akşam -> mutlu_ortam_ışığı",
    "kullanıcı_duygu_üzgün -> neşeli_müzik_çal",
    "kullanıcı_duygu_yorgun & zaman_akşam -> uyku_ortamı_hazırla",
];

/// Every baseline rule, basic rules first.
pub fn all_rules() -> impl Iterator<Item = &'static str> {
    BASIC_RULES.iter().chain(ADVANCED_RULES).copied()
}
