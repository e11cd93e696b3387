use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, to_value};
use medconsult_core::models::{
    consultation::{
        Consultation, ConsultationSummary, CreateConsultationRequest, CreateConsultationResponse,
        ListConsultationsResponse,
    },
    doctor::Doctor,
};

fn doctor() -> Doctor {
    Doctor {
        id: 1,
        name: "Dr. Ana Souza".to_string(),
        crm: "CRM-SP 123456".to_string(),
        specialty: "Cardiology".to_string(),
        email: None,
        phone: Some("+55 11 5555-0100".to_string()),
    }
}

#[test]
fn test_create_response_uses_booking_field_names() {
    let scheduled_at = Utc.with_ymd_and_hms(2030, 1, 15, 13, 30, 0).unwrap();
    let response = CreateConsultationResponse {
        id: 5,
        day: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        scheduling_date: scheduled_at,
        doctor: doctor(),
    };

    let value = to_value(&response).expect("Failed to serialize create response");

    assert_eq!(
        value,
        json!({
            "id": 5,
            "dia": "2099-01-01",
            "horario": "10:00",
            "data_agendamento": "2030-01-15T13:30:00Z",
            "doctor": {
                "id": 1,
                "name": "Dr. Ana Souza",
                "crm": "CRM-SP 123456",
                "specialty": "Cardiology",
                "email": null,
                "phone": "+55 11 5555-0100"
            }
        })
    );
}

#[test]
fn test_create_request_deserialization() {
    let request: CreateConsultationRequest =
        serde_json::from_value(json!({"doctor": 1, "day": "2099-01-01", "time": "10:00"}))
            .expect("Failed to deserialize create request");

    assert_eq!(request.doctor, 1);
    assert_eq!(request.day, "2099-01-01");
    assert_eq!(request.time, "10:00");
}

#[test]
fn test_list_response_shapes() {
    let consultation = Consultation {
        id: 3,
        day: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        time: NaiveTime::from_hms_opt(14, 15, 0).unwrap(),
        doctor_id: 1,
        user_id: 7,
        scheduling_date: Utc.with_ymd_and_hms(2030, 1, 15, 13, 30, 0).unwrap(),
    };

    let list = ListConsultationsResponse::from_summaries(vec![ConsultationSummary::from(
        consultation,
    )]);
    assert_eq!(
        to_value(&list).unwrap(),
        json!([{
            "id": 3,
            "day": "2099-01-01",
            "time": "14:15",
            "scheduling_date": "2030-01-15T13:30:00Z",
            "doctor": 1
        }])
    );

    let empty = ListConsultationsResponse::from_summaries(vec![]);
    assert_eq!(
        to_value(&empty).unwrap(),
        json!({"message": "no consultations scheduled"})
    );
}
