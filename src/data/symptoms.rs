use crate::models::Symptom;

/// The symptom catalog. Each entry lists the body parts it applies to.
pub static SYMPTOMS: &[Symptom] = &[
    Symptom {
        id: "headache",
        name: "두통",
        icon: Some("🤕"),
        body_parts: &["head"],
    },
    Symptom {
        id: "dizziness",
        name: "어지러움",
        icon: Some("💫"),
        body_parts: &["head"],
    },
    Symptom {
        id: "fever",
        name: "발열",
        icon: Some("🌡️"),
        body_parts: &["head", "chest"],
    },
    Symptom {
        id: "migraine",
        name: "편두통",
        icon: Some("🤯"),
        body_parts: &["head"],
    },
    Symptom {
        id: "neck-pain",
        name: "목 통증",
        icon: Some("😣"),
        body_parts: &["neck"],
    },
    Symptom {
        id: "sore-throat",
        name: "인후통",
        icon: Some("😷"),
        body_parts: &["neck"],
    },
    Symptom {
        id: "neck-swelling",
        name: "목 부음",
        icon: Some("🫧"),
        body_parts: &["neck"],
    },
    Symptom {
        id: "swallowing-difficulty",
        name: "삼킴 곤란",
        icon: Some("😖"),
        body_parts: &["neck"],
    },
    Symptom {
        id: "chest-pain",
        name: "가슴 통증",
        icon: Some("💔"),
        body_parts: &["chest"],
    },
    Symptom {
        id: "shortness-of-breath",
        name: "호흡곤란",
        icon: Some("😮‍💨"),
        body_parts: &["chest"],
    },
    Symptom {
        id: "cough",
        name: "기침",
        icon: Some("🤧"),
        body_parts: &["chest", "neck"],
    },
    Symptom {
        id: "phlegm",
        name: "가래",
        icon: Some("🫁"),
        body_parts: &["chest"],
    },
    Symptom {
        id: "abdominal-pain",
        name: "복통",
        icon: Some("🤢"),
        body_parts: &["abdomen"],
    },
    Symptom {
        id: "indigestion",
        name: "소화불량",
        icon: Some("🍽️"),
        body_parts: &["abdomen"],
    },
    Symptom {
        id: "vomiting",
        name: "구토",
        icon: Some("🤮"),
        body_parts: &["abdomen"],
    },
    Symptom {
        id: "diarrhea",
        name: "설사",
        icon: Some("🚽"),
        body_parts: &["abdomen"],
    },
    Symptom {
        id: "arm-pain",
        name: "팔 통증",
        icon: Some("💪"),
        body_parts: &["leftArm", "rightArm"],
    },
    Symptom {
        id: "numbness",
        name: "저림",
        icon: Some("⚡"),
        body_parts: &["leftArm", "rightArm", "leftLeg", "rightLeg"],
    },
    Symptom {
        id: "muscle-pain",
        name: "근육통",
        icon: Some("🦾"),
        body_parts: &["leftArm", "rightArm", "back"],
    },
    Symptom {
        id: "joint-pain",
        name: "관절통",
        icon: Some("🦴"),
        body_parts: &["leftArm", "rightArm"],
    },
    Symptom {
        id: "leg-pain",
        name: "다리 통증",
        icon: Some("🦵"),
        body_parts: &["leftLeg", "rightLeg"],
    },
    Symptom {
        id: "swelling",
        name: "부종",
        icon: Some("🎈"),
        body_parts: &["leftLeg", "rightLeg"],
    },
    Symptom {
        id: "cramp",
        name: "경련",
        icon: Some("〰️"),
        body_parts: &["leftLeg", "rightLeg"],
    },
    Symptom {
        id: "lower-back-pain",
        name: "요통",
        icon: Some("🔙"),
        body_parts: &["back"],
    },
    Symptom {
        id: "back-pain",
        name: "등 통증",
        icon: Some("😫"),
        body_parts: &["back"],
    },
    Symptom {
        id: "disc-pain",
        name: "디스크",
        icon: Some("🩻"),
        body_parts: &["back"],
    },
];
