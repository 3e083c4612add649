// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	fmt::{Debug, Display, Formatter},
	hash::{Hash, Hasher},
	sync::Arc,
};

use crate::{
	error::diagnostic::evaluate::{foreign_object, unexpected_value},
	internal_err,
	value::{Type, Value},
};

/// Opaque host object. Equality is identity.
#[derive(Clone)]
pub struct Object(Arc<dyn Any + Send + Sync>);

impl Object {
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self(Arc::new(value))
	}

	pub fn from_arc(value: Arc<dyn Any + Send + Sync>) -> Self {
		Self(value)
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.0.downcast_ref::<T>()
	}
}

impl PartialEq for Object {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
	}
}

impl Debug for Object {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("Object(..)")
	}
}

impl Display for Object {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("object")
	}
}

pub type MemberReader = Arc<dyn Fn(&Object) -> crate::Result<Value> + Send + Sync>;

/// A readable member of a host object type
#[derive(Clone)]
pub struct MemberDescriptor {
	name: String,
	ty: Type,
	reader: MemberReader,
}

impl MemberDescriptor {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn ty(&self) -> &Type {
		&self.ty
	}

	/// Reads the member and checks the result against the declared type.
	pub fn read(&self, object: &Object) -> crate::Result<Value> {
		let value = (self.reader)(object)?;
		if !value.conforms_to(&self.ty) {
			return Err(crate::Error(unexpected_value(&self.ty, value.kind().to_string())));
		}
		Ok(value)
	}
}

impl Debug for MemberDescriptor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemberDescriptor").field("name", &self.name).field("ty", &self.ty).finish()
	}
}

#[derive(Debug)]
pub struct ObjectDescriptor {
	name: String,
	members: Vec<MemberDescriptor>,
}

/// Semantic type of a host object: a name plus its member table. Two object
/// types are the same type when their names are equal.
#[derive(Clone)]
pub struct ObjectType(Arc<ObjectDescriptor>);

impl ObjectType {
	pub fn builder(name: impl Into<String>) -> ObjectTypeBuilder {
		ObjectTypeBuilder {
			name: name.into(),
			members: Vec::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.0.name
	}

	pub fn members(&self) -> &[MemberDescriptor] {
		&self.0.members
	}

	/// Case-insensitive member lookup.
	pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
		self.0.members.iter().find(|m| m.name.eq_ignore_ascii_case(name))
	}
}

impl PartialEq for ObjectType {
	fn eq(&self, other: &Self) -> bool {
		self.0.name == other.0.name
	}
}

impl Eq for ObjectType {}

impl Hash for ObjectType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.name.hash(state)
	}
}

impl Debug for ObjectType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ObjectType({})", self.0.name)
	}
}

pub struct ObjectTypeBuilder {
	name: String,
	members: Vec<MemberDescriptor>,
}

impl ObjectTypeBuilder {
	/// Adds a member read from host values of type `T`.
	pub fn member<T, F>(self, name: impl Into<String>, ty: Type, read: F) -> Self
	where
		T: Any,
		F: Fn(&T) -> Value + Send + Sync + 'static,
	{
		self.try_member::<T, _>(name, ty, move |object| Ok(read(object)))
	}

	/// Adds a member whose read may fail.
	pub fn try_member<T, F>(mut self, name: impl Into<String>, ty: Type, read: F) -> Self
	where
		T: Any,
		F: Fn(&T) -> crate::Result<Value> + Send + Sync + 'static,
	{
		let name = name.into();
		let object_type = self.name.clone();
		let member = name.clone();
		let reader: MemberReader = Arc::new(move |object: &Object| match object.downcast_ref::<T>() {
			Some(object) => read(object),
			None => Err(crate::Error(foreign_object(&object_type, &member))),
		});
		self.members.push(MemberDescriptor {
			name,
			ty,
			reader,
		});
		self
	}

	pub fn build(self) -> crate::Result<ObjectType> {
		for (idx, member) in self.members.iter().enumerate() {
			if self.members[..idx].iter().any(|m| m.name.eq_ignore_ascii_case(&member.name)) {
				return internal_err!("object type {} declares member '{}' twice", self.name, member.name);
			}
		}
		Ok(ObjectType(Arc::new(ObjectDescriptor {
			name: self.name,
			members: self.members,
		})))
	}
}
