//! Seed datasets
//!
//! The application runs entirely on in-memory data created here at load
//! time. Every consumer takes its employees from [`employees`] so the roster
//! is declared once.

use crate::board::{BoardCategory, BoardTask, IssueKind, TaskHealth};
use crate::report::{AiReport, BugRecord, Complexity, Confidence, DeveloperProfile, WorkItem};
use crate::types::{Employee, EmployeeId, EmployeeStatus, Priority, Ticket, TicketStatus};
use crate::wizard::{Member, MemberRole};

/// Ranked entry of the precomputed suggestion table, keyed by employee id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    /// Directory id of the recommended employee
    pub employee_id: EmployeeId,
    /// Reasons shown under the recommendation
    pub reasons: Vec<String>,
    /// Match score in `0..=100`
    pub match_score: u8,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The team roster
#[must_use]
pub fn employees() -> Vec<Employee> {
    use EmployeeStatus::{Available, Busy};
    vec![
        Employee::new(1, "Priya Sharma", "Senior Developer", "priya.sharma@company.com", Available),
        Employee::new(2, "Rajesh Kumar", "UI/UX Designer", "rajesh.kumar@company.com", Busy),
        Employee::new(3, "Anita Patel", "Data Analyst", "anita.patel@company.com", Available),
        Employee::new(4, "Vikram Singh", "DevOps Engineer", "vikram.singh@company.com", Available),
        Employee::new(5, "Sneha Reddy", "QA Engineer", "sneha.reddy@company.com", Available),
        Employee::new(6, "Arjun Nair", "Backend Developer", "arjun.nair@company.com", Available),
    ]
}

/// Dashboard tickets; the last four are open for assignment
#[must_use]
pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(1, "TK001", "User Dashboard Analytics", "Implement analytics dashboard for user behavior tracking", Priority::High)
            .with_assignee("Anita Patel", TicketStatus::Completed),
        Ticket::new(2, "TK002", "Mobile App Redesign", "Redesign mobile app interface for better user experience", Priority::Medium)
            .with_assignee("Rajesh Kumar", TicketStatus::InProgress),
        Ticket::new(3, "TK003", "API Integration", "Integrate third-party APIs for payment processing", Priority::High)
            .with_assignee("Priya Sharma", TicketStatus::Review),
        Ticket::new(4, "TK004", "Database Optimization", "Optimize database queries for better performance", Priority::Low)
            .with_assignee("Vikram Singh", TicketStatus::Pending),
        Ticket::new(5, "TK005", "New Feature Implementation", "Implement new chat feature for customer support", Priority::Medium),
        Ticket::new(6, "TK006", "Bug Fix for Payment Module", "Fix critical bug in payment processing module", Priority::High),
        Ticket::new(7, "TK007", "Security Update", "Update security protocols and implement new authentication", Priority::High),
        Ticket::new(8, "TK008", "Performance Optimization", "Optimize application performance and reduce load times", Priority::Medium),
    ]
}

/// Precomputed suggestion table, highest score first
#[must_use]
pub fn ranked_candidates() -> Vec<RankedCandidate> {
    vec![
        RankedCandidate {
            employee_id: EmployeeId(3),
            reasons: strings(&[
                "Perfect skill match for data analysis tasks",
                "Low current workload",
                "Excellent track record",
            ]),
            match_score: 94,
        },
        RankedCandidate {
            employee_id: EmployeeId(1),
            reasons: strings(&[
                "Strong technical background",
                "Moderate workload",
                "High performance rating",
            ]),
            match_score: 87,
        },
        RankedCandidate {
            employee_id: EmployeeId(2),
            reasons: strings(&[
                "Relevant design experience",
                "High workload but manageable",
                "Good collaboration history",
            ]),
            match_score: 72,
        },
    ]
}

fn work(ticket: &str, title: &str, duration: &str, client: &str, rating: f32) -> WorkItem {
    WorkItem {
        ticket: ticket.to_string(),
        title: title.to_string(),
        status: "Completed".to_string(),
        duration: duration.to_string(),
        client: client.to_string(),
        rating,
    }
}

fn bug(id: &str, title: &str, severity: Priority, time_to_resolve: &str, impact: &str) -> BugRecord {
    BugRecord {
        bug: id.to_string(),
        title: title.to_string(),
        severity,
        resolved: true,
        time_to_resolve: time_to_resolve.to_string(),
        impact: impact.to_string(),
    }
}

fn rajesh(skill_match: u8, recent_work: Vec<WorkItem>, bug_history: Vec<BugRecord>) -> DeveloperProfile {
    DeveloperProfile {
        id: 1,
        name: "Rajesh Kumar".to_string(),
        skill_match,
        experience: "5+ years".to_string(),
        rating: 4.9,
        completed_tickets: 45,
        bugs_solved: 23,
        current_status: EmployeeStatus::Available,
        hourly_rate: "$45/hr".to_string(),
        location: "Bangalore, India".to_string(),
        skills: strings(&[
            "React", "WebSocket", "Node.js", "Real-time Systems", "MongoDB", "Express.js", "Socket.io", "Redis",
        ]),
        recent_work,
        bug_history,
        achievements: strings(&["Top Performer Q2 2024", "WebSocket Expert Certification", "Real-time Systems Specialist"]),
        workload: "Heavy (45 tickets, 23 bugs handled)".to_string(),
    }
}

/// AI report table
#[must_use]
pub fn reports() -> Vec<AiReport> {
    use Priority::{High, Low, Medium};

    let chat_developers = vec![
        rajesh(
            98,
            vec![
                work("TK-2024-089", "Chat Integration for E-commerce Platform", "3 days", "ShopEasy Ltd", 5.0),
                work("TK-2024-076", "Real-time Notification System", "4 days", "NotifyApp Inc", 4.8),
                work("TK-2024-065", "WebSocket Performance Optimization", "2 days", "SpeedChat Co", 4.9),
            ],
            vec![
                bug("BUG-001", "Memory leak in WebSocket connection", High, "2 hours", "System Performance"),
                bug("BUG-002", "Real-time sync issues between clients", Medium, "4 hours", "User Experience"),
                bug("BUG-003", "Connection timeout in high traffic", High, "1.5 hours", "System Stability"),
            ],
        ),
        DeveloperProfile {
            id: 2,
            name: "Priya Sharma".to_string(),
            skill_match: 95,
            experience: "4+ years".to_string(),
            rating: 4.8,
            completed_tickets: 38,
            bugs_solved: 18,
            current_status: EmployeeStatus::Available,
            hourly_rate: "$42/hr".to_string(),
            location: "Mumbai, India".to_string(),
            skills: strings(&["React", "Node.js", "WebSocket", "TypeScript", "Redis", "PostgreSQL", "Socket.io", "AWS"]),
            recent_work: vec![
                work("TK-2024-082", "Live Chat Dashboard Development", "5 days", "ChatPro Systems", 4.9),
                work("TK-2024-071", "Socket.io Implementation & Scaling", "3 days", "ScaleChat Ltd", 4.7),
                work("TK-2024-058", "Real-time Analytics Dashboard", "6 days", "AnalyticsPro", 4.8),
            ],
            bug_history: vec![
                bug("BUG-004", "WebSocket reconnection failure", High, "1.5 hours", "Connection Stability"),
                bug("BUG-005", "Message ordering issues in group chats", Medium, "3 hours", "Message Integrity"),
                bug("BUG-006", "TypeScript compilation errors", Low, "1 hour", "Development Speed"),
            ],
            achievements: strings(&["TypeScript Expert", "React Advanced Certification", "Cloud Architecture Specialist"]),
            workload: "Moderate (38 tickets, 18 bugs handled)".to_string(),
        },
        DeveloperProfile {
            id: 3,
            name: "Arjun Patel".to_string(),
            skill_match: 92,
            experience: "3+ years".to_string(),
            rating: 4.7,
            completed_tickets: 32,
            bugs_solved: 14,
            current_status: EmployeeStatus::Busy,
            hourly_rate: "$38/hr".to_string(),
            location: "Pune, India".to_string(),
            skills: strings(&["React", "Node.js", "Socket.io", "Express.js", "PostgreSQL", "Docker", "Kubernetes", "GraphQL"]),
            recent_work: vec![
                work("TK-2024-079", "Chat Message Encryption System", "4 days", "SecureChat Inc", 4.8),
                work("TK-2024-067", "Real-time File Sharing Feature", "5 days", "FileShare Pro", 4.6),
                work("TK-2024-054", "Group Chat Features Implementation", "7 days", "TeamChat Co", 4.7),
            ],
            bug_history: vec![
                bug("BUG-007", "File upload in chat failing", Medium, "2 hours", "Feature Functionality"),
                bug("BUG-008", "Group message delivery delay", Low, "1 hour", "Performance"),
                bug("BUG-009", "Docker container memory leak", High, "3 hours", "System Resources"),
            ],
            achievements: strings(&["Docker Certified", "GraphQL Specialist", "Security Best Practices"]),
            workload: "Light (32 tickets, 14 bugs handled)".to_string(),
        },
    ];

    let security_developers = vec![rajesh(
        97,
        vec![
            work("TK-2024-089", "Chat Integration", "3 days", "ShopEasy Ltd", 5.0),
            work("TK-2024-076", "Notification System", "4 days", "NotifyApp Inc", 4.8),
            work("TK-2024-065", "WebSocket Optimization", "2 days", "SpeedChat Co", 4.9),
        ],
        vec![
            bug("BUG-001", "Memory leak", High, "2 hours", "Performance"),
            bug("BUG-002", "Sync issues", Medium, "4 hours", "User Experience"),
            bug("BUG-003", "Timeout", High, "1.5 hours", "Stability"),
        ],
    )];

    vec![
        AiReport {
            id: 1,
            ticket_number: "TK-2024-001".to_string(),
            ticket_description: "Implement real-time chat system with WebSocket integration for customer support".to_string(),
            user_query: "Need a developer for chat feature implementation with real-time messaging capabilities".to_string(),
            ai_response: "Recommend Senior Full-Stack Developer with React/Node.js and WebSocket skills. Estimated completion: 5-7 days.".to_string(),
            ai_summary: "AI suggests a skilled developer for real-time chat system. High match with WebSocket and Node.js expertise. Completion: 5-7 days.".to_string(),
            ai_rating: 4.8,
            priority: High,
            complexity: Complexity::Advanced,
            estimated_hours: 40,
            recommended_skills: strings(&["React", "WebSocket", "Node.js", "Real-time Systems"]),
            match_score: 94,
            status: "Analyzed".to_string(),
            timestamp: "2024-07-15 10:30:00".to_string(),
            confidence: Confidence::High,
            category: "Full-Stack Development".to_string(),
            top_developers: chat_developers,
        },
        AiReport {
            id: 2,
            ticket_number: "TK-2024-002".to_string(),
            ticket_description: "Enhance real-time chat with WebSocket security features".to_string(),
            user_query: "Need developer to add security to existing chat system using WebSocket".to_string(),
            ai_response: "Recommend developer with WebSocket and security expertise. Estimated completion: 4-6 days.".to_string(),
            ai_summary: "AI suggests a developer for enhancing chat security. High match with WebSocket skills. Completion: 4-6 days.".to_string(),
            ai_rating: 4.7,
            priority: High,
            complexity: Complexity::Advanced,
            estimated_hours: 35,
            recommended_skills: strings(&["WebSocket", "Node.js", "Security", "React"]),
            match_score: 92,
            status: "Analyzed".to_string(),
            timestamp: "2024-07-16 09:15:00".to_string(),
            confidence: Confidence::High,
            category: "Full-Stack Development".to_string(),
            top_developers: security_developers,
        },
    ]
}

/// Project board tasks
#[must_use]
pub fn board_tasks() -> Vec<BoardTask> {
    let task = |id, name: &str, due: &str, priority, health| BoardTask {
        id,
        name: name.to_string(),
        description: String::new(),
        assignee: "User".to_string(),
        due: due.to_string(),
        priority,
        health,
        category: BoardCategory::ToDo,
        kind: IssueKind::Story,
    };
    vec![
        task(1, "Draft project brief", "Today - 15 Jul", Priority::Low, TaskHealth::OnTrack),
        task(2, "Schedule kickoff meeting", "14 - 16 Jul", Priority::Medium, TaskHealth::AtRisk),
        task(3, "Share timeline with teammates", "15 - 17 Jul", Priority::High, TaskHealth::OffTrack),
    ]
}

/// Workspace owner created with a new organization
#[must_use]
pub fn workspace_owner() -> Member {
    Member {
        id: 1,
        name: "sakthivel".to_string(),
        email: "vel172683@gmail.com".to_string(),
        role: MemberRole::Owner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ticket_ids_and_codes_are_unique() {
        let tickets = tickets();
        let ids: HashSet<_> = tickets.iter().map(|t| t.id).collect();
        let codes: HashSet<_> = tickets.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(ids.len(), tickets.len());
        assert_eq!(codes.len(), tickets.len());
    }

    #[test]
    fn ranked_candidates_reference_roster() {
        let roster: HashSet<_> = employees().into_iter().map(|e| e.id).collect();
        for candidate in ranked_candidates() {
            assert!(roster.contains(&candidate.employee_id));
        }
    }

    #[test]
    fn ranked_candidates_are_sorted() {
        let scores: Vec<_> = ranked_candidates().iter().map(|c| c.match_score).collect();
        assert_eq!(scores, vec![94, 87, 72]);
    }
}
