use crate::models::SeverityLevel;

/// The closed set of departments the classifier may recommend.
/// Keep in sync with the list named in the system prompt and with
/// the locator's keyword table.
pub const DEPARTMENTS: &[&str] = &[
    "내과",
    "외과",
    "정형외과",
    "신경과",
    "소화기내과",
    "이비인후과",
    "피부과",
    "안과",
    "산부인과",
    "소아과",
    "심장내과",
    "호흡기내과",
];

/// Department used whenever nothing more specific can be determined.
pub const GENERAL_DEPARTMENT: &str = "내과";

/// System prompt fixing the response schema. The model must answer
/// with a single JSON object; the non-diagnostic disclaimer is part
/// of the instruction so it can be shown alongside results.
pub const CLASSIFIER_SYSTEM_PROMPT: &str = r#"당신은 의료 증상 분석 AI입니다. 주어진 신체 부위와 증상을 분석하여 가능한 질환을 예측해주세요.

응답은 반드시 다음 JSON 형식으로만 답변해주세요:
{
  "predictions": [
    {
      "name": "질환명",
      "probability": 0.7,
      "urgency": "normal",
      "specialists": ["내과", "정형외과"],
      "description": "질환에 대한 간단한 설명"
    }
  ]
}

urgency는 "normal", "urgent", "emergency" 중 하나여야 합니다.
가능한 진료과: 내과, 외과, 정형외과, 신경과, 소화기내과, 이비인후과, 피부과, 안과, 산부인과, 소아과, 심장내과, 호흡기내과

중요: 이는 참고용이며 실제 진단은 의료진과 상담하세요."#;

/// Build the user-turn narrative from the structured selection.
pub fn build_user_prompt(body_part: &str, symptoms: &[String], severity: SeverityLevel) -> String {
    format!(
        "신체 부위: {}\n증상: {}\n심각도: {}\n\n위 정보를 바탕으로 가능한 질환을 분석해주세요.",
        body_part,
        symptoms.join(", "),
        severity,
    )
}
