mod common;

#[cfg(test)]
pub mod draft_tests {
    use serde_json::json;

    use super::common::*;

    use atelier_admin::common::ValidationError;
    use atelier_admin::models::*;

    #[test]
    fn test_blog_draft_from_record_leaves_files_empty() {
        let blog = get_seed_blog_0();
        let draft = BlogDraft::from_record(&blog);

        assert_eq!(draft.title, blog.title);
        assert_eq!(draft.description, blog.description);
        assert_eq!(draft.headings, blog.headings);
        assert_eq!(draft.items, blog.items);
        assert!(draft.image.is_none());
        assert!(draft.heading_image.is_none());
    }

    #[test]
    fn test_blog_draft_add_then_remove_heading_restores_state() {
        let mut draft = BlogDraft::from_record(&get_seed_blog_0());
        let before = draft.clone();

        draft.add_heading();
        draft.update_heading(2, "Extra");
        draft.remove_heading(2);

        assert_eq!(draft, before);
    }

    #[test]
    fn test_blog_draft_remove_heading_shifts_later_indices() {
        let mut draft = BlogDraft::from_record(&get_seed_blog_0());

        draft.remove_heading(0);

        assert_eq!(draft.headings, vec!["Details".to_string()]);
    }

    #[test]
    fn test_blog_draft_out_of_range_operations_are_ignored() {
        let mut draft = BlogDraft::from_record(&get_seed_blog_0());
        let before = draft.clone();

        draft.update_heading(9, "nope");
        draft.remove_heading(9);
        draft.update_item_title(9, "nope");
        draft.update_item_description(9, "nope");
        draft.remove_item(9);

        assert_eq!(draft, before);
    }

    #[test]
    fn test_blog_draft_item_updates_target_one_field() {
        let mut draft = BlogDraft::from_record(&get_seed_blog_0());

        draft.update_item_title(1, "Renamed");

        assert_eq!(draft.items[1].title, "Renamed");
        assert_eq!(draft.items[1].description, "Second item body");
        assert_eq!(draft.items[0], get_seed_blog_0().items[0]);
    }

    #[test]
    fn test_blog_draft_validate_requires_title_and_description() {
        let mut draft = BlogDraft::default();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Title"))
        );

        draft.title = "Launch Notes".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Description"))
        );

        draft.description = "Body".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_blog_draft_lists_serialize_as_json_strings() {
        let draft = BlogDraft::from_record(&get_seed_blog_0());

        let headings: serde_json::Value =
            serde_json::from_str(&draft.headings_json().unwrap()).unwrap();
        let items: serde_json::Value =
            serde_json::from_str(&draft.items_json().unwrap()).unwrap();

        assert_eq!(headings, json!(["Intro", "Details"]));
        assert_eq!(
            items,
            json!([
                {"title": "First", "description": "First item body"},
                {"title": "Second", "description": "Second item body"},
            ])
        );
    }

    #[test]
    fn test_footer_draft_add_then_remove_link_restores_state() {
        let mut draft = FooterDraft::from_record(&get_seed_footer_0());
        let before = draft.clone();

        draft.add_link();
        draft.update_link_platform(2, "twitter");
        draft.update_link_url(2, "https://twitter.com/acme");
        draft.remove_link(2);

        assert_eq!(draft, before);
    }

    #[test]
    fn test_footer_draft_remove_link_shifts_later_indices() {
        let mut draft = FooterDraft::from_record(&get_seed_footer_0());

        draft.remove_link(0);

        assert_eq!(draft.social_links.len(), 1);
        assert_eq!(draft.social_links[0].platform, "linkedin");
    }

    #[test]
    fn test_footer_draft_validate_requires_phone() {
        let mut draft = FooterDraft::from_record(&get_seed_footer_0());
        draft.phone = String::new();

        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Phone"))
        );
    }

    #[test]
    fn test_footer_draft_validate_rejects_unknown_platform() {
        let mut draft = FooterDraft::from_record(&get_seed_footer_0());
        draft.add_link();
        draft.update_link_platform(2, "myspace");

        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Platform"))
        );
    }

    #[test]
    fn test_footer_apply_field_pairs_platform_and_url_in_order() {
        let mut draft = FooterDraft::default();
        draft.apply_field("phone", "+1 555 0100");
        draft.apply_field("platform", "facebook");
        draft.apply_field("url", "https://facebook.com/acme");
        draft.apply_field("platform", "linkedin");
        draft.apply_field("url", "https://linkedin.com/company/acme");

        assert_eq!(draft.social_links.len(), 2);
        assert_eq!(draft.social_links[0].platform, "facebook");
        assert_eq!(draft.social_links[0].url, "https://facebook.com/acme");
        assert_eq!(draft.social_links[1].platform, "linkedin");
        assert_eq!(
            draft.social_links[1].url,
            "https://linkedin.com/company/acme"
        );
    }

    #[test]
    fn test_footer_apply_field_url_before_platform_opens_a_row() {
        let mut draft = FooterDraft::default();
        draft.apply_field("url", "https://facebook.com/acme");

        assert_eq!(draft.social_links.len(), 1);
        assert_eq!(draft.social_links[0].url, "https://facebook.com/acme");
        assert_eq!(draft.social_links[0].platform, "");
    }

    #[test]
    fn test_footer_payload_uses_camel_case_keys() {
        let draft = FooterDraft::from_record(&get_seed_footer_0());
        let value = serde_json::to_value(draft.to_payload()).unwrap();

        assert!(value.get("contactInfo").is_some());
        assert!(value.get("socialLinks").is_some());
        assert_eq!(value["contactInfo"]["phone"], json!("+1 555 0100"));
        assert_eq!(value["socialLinks"][1]["platform"], json!("linkedin"));
    }

    #[test]
    fn test_testimonial_draft_to_payload_parses_rating() {
        let draft = TestimonialDraft::from_record(&get_seed_testimonial_0());
        let payload = draft.to_payload().unwrap();

        assert_eq!(payload.title, "Great");
        assert_eq!(payload.rating, 4.5);
    }

    #[test]
    fn test_testimonial_draft_rejects_non_numeric_rating() {
        let mut draft = TestimonialDraft::from_record(&get_seed_testimonial_0());
        draft.rating = "five".to_string();

        assert_eq!(
            draft.to_payload().unwrap_err(),
            ValidationError::NotANumber("Rating")
        );
    }

    #[test]
    fn test_testimonial_draft_requires_every_field() {
        let mut draft = TestimonialDraft::default();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Title"))
        );

        draft.title = "Great".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Name"))
        );

        draft.name = "A".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Description"))
        );

        draft.description = "Nice work".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Rating"))
        );

        draft.rating = "4.5".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_job_draft_round_trips_through_record() {
        let job = get_seed_job_0();
        let draft = JobDraft::from_record(&job);

        assert_eq!(draft.title, job.title);
        assert_eq!(draft.department, job.department);
        assert_eq!(draft.location, job.location);
        assert_eq!(draft.kind, job.kind);
    }

    #[test]
    fn test_job_draft_requires_every_field() {
        let mut draft = JobDraft::default();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Title"))
        );

        draft.title = "Backend Engineer".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Department"))
        );

        draft.department = "Engineering".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Location"))
        );

        draft.location = "Remote".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Type"))
        );

        draft.kind = "Full-time".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_job_payload_serializes_kind_as_type() {
        let draft = JobDraft::from_record(&get_seed_job_0());
        let value = serde_json::to_value(draft.to_payload().unwrap()).unwrap();

        assert_eq!(value["type"], json!("Full-time"));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_job_record_requires_an_id() {
        let missing_id = serde_json::from_value::<Job>(json!({
            "title": "Backend Engineer",
        }));
        assert!(missing_id.is_err());
    }

    #[test]
    fn test_about_draft_from_record_copies_scalars_only() {
        let section = get_seed_section_0();
        let draft = AboutDraft::from_record(&section);

        assert_eq!(draft.title, "Our Mission");
        assert_eq!(draft.kind, "mission");
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_about_draft_validate_requires_title_and_type() {
        let mut draft = AboutDraft::default();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Title"))
        );

        draft.title = "Our Mission".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Type"))
        );
    }

    #[test]
    fn test_record_deserializes_mongo_shape() {
        let blog: Blog = serde_json::from_value(json!({
            "_id": "abc123",
            "title": "Hello",
            "description": "World",
            "headingImage": "https://cdn.test/h.png",
            "headings": ["One"],
            "items": [{"title": "A", "description": "B"}],
        }))
        .unwrap();

        assert_eq!(blog.id, "abc123");
        assert_eq!(blog.heading_image.as_deref(), Some("https://cdn.test/h.png"));
        assert!(blog.image.is_none());
        assert!(blog.created_at.is_none());
    }
}
