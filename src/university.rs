//! The university arena.
//!
//! [`University`] owns every entity in flat per-type vectors and hands out
//! typed handles. Entities refer to each other only through those handles,
//! so bidirectional links need no shared ownership.
//!
//! Handles are only meaningful for the arena that minted them. Passing a
//! handle from another `University` panics on access.

use serde::Serialize;

use crate::models::{
    Course, CourseRef, Department, DepartmentRef, Enrollment, EnrollmentRef, Faculty, FacultyRef,
    Group, GroupRef, Lesson, LessonRef, Professor, ProfessorRef, Room, RoomRef, Schedule,
    ScheduleRef, Student, StudentRef,
};

/// Owner of the whole object graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct University {
    pub(crate) students: Vec<Student>,
    pub(crate) professors: Vec<Professor>,
    pub(crate) courses: Vec<Course>,
    pub(crate) enrollments: Vec<Enrollment>,
    pub(crate) groups: Vec<Group>,
    pub(crate) departments: Vec<Department>,
    pub(crate) faculties: Vec<Faculty>,
    pub(crate) rooms: Vec<Room>,
    pub(crate) lessons: Vec<Lesson>,
    pub(crate) schedules: Vec<Schedule>,
}

macro_rules! arena_access {
    ($field:ident, $ty:ty, $handle:ident, $add:ident, $get:ident, $with_refs:ident) => {
        #[doc = concat!("Adds a [`", stringify!($ty), "`] and returns its handle.")]
        pub fn $add(&mut self, item: $ty) -> $handle {
            self.$field.push(item);
            $handle(self.$field.len() - 1)
        }

        #[doc = concat!("Returns the [`", stringify!($ty), "`] behind `r`.")]
        #[inline]
        pub fn $get(&self, r: $handle) -> &$ty {
            &self.$field[r.0]
        }

        #[doc = concat!("All [`", stringify!($ty), "`] entities in insertion order.")]
        #[inline]
        pub fn $field(&self) -> &[$ty] {
            &self.$field
        }

        #[doc = concat!("All [`", stringify!($ty), "`] entities paired with their handles.")]
        pub fn $with_refs(&self) -> impl Iterator<Item = ($handle, &$ty)> + '_ {
            self.$field
                .iter()
                .enumerate()
                .map(|(i, item)| ($handle(i), item))
        }
    };
}

impl University {
    /// Creates an empty university.
    pub fn new() -> Self {
        Self::default()
    }

    arena_access!(students, Student, StudentRef, add_student, student, students_with_refs);
    arena_access!(
        professors,
        Professor,
        ProfessorRef,
        add_professor,
        professor,
        professors_with_refs
    );
    arena_access!(courses, Course, CourseRef, add_course, course, courses_with_refs);
    arena_access!(groups, Group, GroupRef, add_group, group, groups_with_refs);
    arena_access!(
        departments,
        Department,
        DepartmentRef,
        add_department,
        department,
        departments_with_refs
    );
    arena_access!(faculties, Faculty, FacultyRef, add_faculty, faculty, faculties_with_refs);
    arena_access!(rooms, Room, RoomRef, add_room, room, rooms_with_refs);
    arena_access!(lessons, Lesson, LessonRef, add_lesson, lesson, lessons_with_refs);
    arena_access!(
        schedules,
        Schedule,
        ScheduleRef,
        add_schedule,
        schedule,
        schedules_with_refs
    );

    /// Returns the enrollment behind `r`.
    #[inline]
    pub fn enrollment(&self, r: EnrollmentRef) -> &Enrollment {
        &self.enrollments[r.0]
    }

    /// All enrollments in creation order.
    #[inline]
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// All enrollments paired with their handles.
    pub fn enrollments_with_refs(&self) -> impl Iterator<Item = (EnrollmentRef, &Enrollment)> + '_ {
        self.enrollments
            .iter()
            .enumerate()
            .map(|(i, e)| (EnrollmentRef(i), e))
    }

    /// Handles of every student in insertion order.
    pub fn student_refs(&self) -> Vec<StudentRef> {
        (0..self.students.len()).map(StudentRef).collect()
    }

    /// Records an enrollment without any duplicate check and links it into
    /// the student's and course's enrollment lists.
    pub(crate) fn insert_enrollment(&mut self, enrollment: Enrollment) -> EnrollmentRef {
        let (student, course) = (enrollment.student, enrollment.course);
        self.enrollments.push(enrollment);
        let r = EnrollmentRef(self.enrollments.len() - 1);
        self.students[student.0].enrollments.push(r);
        self.courses[course.0].enrollments.push(r);
        r
    }

    /// Finds the first student with the given ID.
    pub fn find_student(&self, student_id: &str) -> Option<StudentRef> {
        self.students_with_refs()
            .find(|(_, s)| s.student_id == student_id)
            .map(|(r, _)| r)
    }

    /// Finds the first professor with the given employee ID.
    pub fn find_professor(&self, employee_id: &str) -> Option<ProfessorRef> {
        self.professors_with_refs()
            .find(|(_, p)| p.employee_id == employee_id)
            .map(|(r, _)| r)
    }

    /// Finds the first course with the given code.
    pub fn find_course(&self, course_code: &str) -> Option<CourseRef> {
        self.courses_with_refs()
            .find(|(_, c)| c.course_code == course_code)
            .map(|(r, _)| r)
    }

    /// Finds the student's enrollment in `course`, if any.
    pub fn enrollment_for(&self, student: StudentRef, course: CourseRef) -> Option<EnrollmentRef> {
        self.student(student)
            .enrollments
            .iter()
            .copied()
            .find(|&e| self.enrollment(e).course == course)
    }

    /// Lessons in `schedule` whose course is attended by any member of `group`.
    pub fn lessons_for_group(&self, schedule: ScheduleRef, group: GroupRef) -> Vec<LessonRef> {
        let members = &self.group(group).students;
        self.schedule(schedule)
            .lessons
            .iter()
            .copied()
            .filter(|&l| match self.lesson(l).course {
                Some(c) => self.course(c).students.iter().any(|s| members.contains(s)),
                None => false,
            })
            .collect()
    }

    /// Lessons in `schedule` given by `professor`.
    pub fn lessons_for_professor(
        &self,
        schedule: ScheduleRef,
        professor: ProfessorRef,
    ) -> Vec<LessonRef> {
        self.schedule(schedule)
            .lessons
            .iter()
            .copied()
            .filter(|&l| self.lesson(l).professor == Some(professor))
            .collect()
    }

    /// Lessons in `schedule` held in `room`.
    pub fn lessons_for_room(&self, schedule: ScheduleRef, room: RoomRef) -> Vec<LessonRef> {
        self.schedule(schedule)
            .lessons
            .iter()
            .copied()
            .filter(|&l| self.lesson(l).room == Some(room))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonInfo;

    #[test]
    fn test_handles_are_sequential() {
        let mut u = University::new();
        let a = u.add_group(Group::new("A"));
        let b = u.add_group(Group::new("B"));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(u.group(b).group_name, "B");
        assert_eq!(u.groups().len(), 2);
    }

    #[test]
    fn test_serializes_handles_as_indices() {
        let mut u = University::new();
        let s = u.add_student(Student::new(
            "124017",
            PersonInfo::new("Sabina", "Babaeva", "2005-03-22"),
        ));
        u.add_group(Group::new("A"));
        let g = u.add_group(Group::new("B"));
        u.join_group(s, g).unwrap();

        let v = serde_json::to_value(&u).unwrap();
        assert_eq!(v["students"][0]["groups"], serde_json::json!([1]));
        assert_eq!(v["groups"][1]["students"], serde_json::json!([0]));
    }

    #[test]
    fn test_find_student_and_course() {
        let mut u = University::new();
        let s = u.add_student(Student::new(
            "124017",
            PersonInfo::new("Sabina", "Babaeva", "2005-03-22"),
        ));
        let c = u.add_course(Course::new("09.03.03", "Introduction to Programming", 5));

        assert_eq!(u.find_student("124017"), Some(s));
        assert_eq!(u.find_student("000000"), None);
        assert_eq!(u.student_refs(), vec![s]);
        assert_eq!(u.find_course("09.03.03"), Some(c));
        assert!(u.enrollment_for(s, c).is_none());
    }

    #[test]
    fn test_lesson_lookups() {
        let mut u = University::new();
        let prof = u.add_professor(Professor::new(
            "prof21053",
            PersonInfo::new("Alice", "Johnson", "2006-09-21"),
        ));
        let s1 = u.add_student(Student::new(
            "124017",
            PersonInfo::new("Sabina", "Babaeva", "2005-03-22"),
        ));
        let s2 = u.add_student(Student::new(
            "123067",
            PersonInfo::new("Charlie", "Green", "2006-11-30"),
        ));
        let course = u.add_course(Course::new("09.03.03", "Introduction to Programming", 5));
        let other = u.add_course(Course::new("01.03.02", "Calculus", 4));
        let g1 = u.add_group(Group::new("ИДБ-24-11"));
        let g2 = u.add_group(Group::new("ИДБ-24-12"));
        let room = u.add_room(Room::new("305", 2));
        let sched = u.add_schedule(Schedule::new());
        let l1 = u.add_lesson(Lesson::new("10:20", 90));
        let l2 = u.add_lesson(Lesson::new("12:00", 90));

        u.enroll_in_course(s1, course).unwrap();
        u.enroll_in_course(s2, other).unwrap();
        u.join_group(s1, g1).unwrap();
        u.join_group(s2, g2).unwrap();
        u.set_lesson_course(l1, course);
        u.set_lesson_course(l2, other);
        u.set_lesson_professor(l1, prof);
        u.room_add_lesson(room, l2);
        u.schedule_add_lesson(sched, l1);
        u.schedule_add_lesson(sched, l2);

        assert_eq!(u.lessons_for_group(sched, g1), vec![l1]);
        assert_eq!(u.lessons_for_group(sched, g2), vec![l2]);
        assert_eq!(u.lessons_for_professor(sched, prof), vec![l1]);
        assert_eq!(u.lessons_for_room(sched, room), vec![l2]);
    }
}
